//! Redis storage implementation
//!
//! ## Module Structure
//!
//! - `pool` - connection handling, liveness probe, teardown
//! - `cache` - plain key-value reads and writes
//! - `script` - server-side script evaluation

mod cache;
mod pool;
mod script;

pub use pool::RedisPool;
