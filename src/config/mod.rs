//! Configuration management
//!
//! Process configuration comes from the environment and is validated at
//! startup. The per-application rule sets the gateway enforces are not part
//! of this data; they live in the shared store and are resolved per request.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{LimiterError, Result};
use tracing::{debug, info};

/// Main configuration for the gateway process
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Shared store configuration
    pub redis: RedisConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `REDIS_URL` wins over the discrete `REDIS_HOST` / `REDIS_PORT` /
    /// `REDIS_PASSWORD` parts.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment");

        let mut server = ServerConfig::default();
        if let Ok(host) = std::env::var("HOST") {
            server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            server.port = port
                .parse()
                .map_err(|_| LimiterError::Config(format!("invalid PORT: {}", port)))?;
        }

        let redis = if let Ok(url) = std::env::var("REDIS_URL") {
            RedisConfig {
                url,
                ..RedisConfig::default()
            }
        } else {
            let host = std::env::var("REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = match std::env::var("REDIS_PORT") {
                Ok(port) => port
                    .parse()
                    .map_err(|_| LimiterError::Config(format!("invalid REDIS_PORT: {}", port)))?,
                Err(_) => 6379,
            };
            let password = std::env::var("REDIS_PASSWORD").ok();
            RedisConfig::from_parts(&host, port, password.as_deref())
        };

        let config = Self { server, redis };
        config.validate()?;

        debug!("Configuration loaded");
        Ok(config)
    }
}
