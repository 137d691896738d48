//! Storage layer
//!
//! All shared state lives in Redis; this module is the only place that
//! speaks its wire dialect.

pub mod redis;

pub use self::redis::RedisPool;
