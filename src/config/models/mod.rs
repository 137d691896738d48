//! Configuration data models

pub mod rules;
pub mod server;
pub mod storage;

pub use rules::*;
pub use server::*;
pub use storage::*;

/// Default server host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default Redis URL
pub fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

/// Default store connect timeout in seconds
pub fn default_connect_timeout() -> u64 {
    5
}
