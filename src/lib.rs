//! # rategate
//!
//! Distributed sliding-window admission gateway: actix-web middleware that
//! enforces per-application rate-limit rules against a shared Redis store,
//! so any number of replicas apply one budget.
//!
//! All mutable state lives in the store, and each per-rule accounting step
//! is a single atomic server-side script; that pairing is what keeps
//! enforcement exact under concurrency across replicas.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rategate::{run_server, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let config = Config::from_env()?;
//!     run_server(config).await.map_err(|e| e.into())
//! }
//! ```
//!
//! Rule sets are JSON records in the store (seeded with the `seed` binary):
//!
//! ```json
//! { "rules": [ { "points": 5, "duration": 60 } ] }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use server::run_server;
pub use storage::RedisPool;
pub use utils::error::{LimiterError, Result};
