//! Configuration validation
//!
//! Startup-time checks for process configuration. Rule-set validation is
//! separate and happens on every resolution; see `models::rules`.

use super::models::{RedisConfig, ServerConfig};
use super::Config;
use crate::utils::error::{LimiterError, Result};
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.server.validate()?;
        self.redis.validate()?;
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(LimiterError::Config(
                "server host cannot be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(LimiterError::Config(
                "server port must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for RedisConfig {
    fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.url)
            .map_err(|e| LimiterError::Config(format!("invalid Redis URL: {}", e)))?;
        if parsed.scheme() != "redis" && parsed.scheme() != "rediss" {
            return Err(LimiterError::Config(format!(
                "unsupported Redis URL scheme: {}",
                parsed.scheme()
            )));
        }
        if self.connect_timeout == 0 {
            return Err(LimiterError::Config(
                "store connect timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
