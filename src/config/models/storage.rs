//! Store configuration

use super::{default_connect_timeout, default_redis_url};
use serde::{Deserialize, Serialize};

/// Redis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis URL
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl RedisConfig {
    /// Build a config from discrete host/port/password parts
    pub fn from_parts(host: &str, port: u16, password: Option<&str>) -> Self {
        let url = match password {
            Some(password) if !password.is_empty() => {
                format!("redis://:{}@{}:{}", password, host, port)
            }
            _ => format!("redis://{}:{}", host, port),
        };
        Self {
            url,
            ..Self::default()
        }
    }
}
