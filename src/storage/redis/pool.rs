//! Redis connection handling
//!
//! One long-lived multiplexed connection shared by every request. The pool
//! is cloned freely through application state and never mutated after
//! initialization.

use crate::config::RedisConfig;
use crate::utils::error::Result;
use redis::aio::MultiplexedConnection;
use redis::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Redis connection pool
#[derive(Debug, Clone)]
pub struct RedisPool {
    pub(crate) connection: MultiplexedConnection,
}

impl RedisPool {
    /// Connect to the store
    pub async fn new(config: &RedisConfig) -> Result<Self> {
        info!("Connecting to store at {}", Self::sanitize_url(&config.url));

        let client = Client::open(config.url.as_str())?;
        let connection = tokio::time::timeout(
            Duration::from_secs(config.connect_timeout),
            client.get_multiplexed_async_connection(),
        )
        .await
        .map_err(|_| {
            redis::RedisError::from((redis::ErrorKind::IoError, "store connection timed out"))
        })??;

        debug!("Store connection established");
        Ok(Self { connection })
    }

    /// Clone of the shared multiplexed connection
    pub(crate) fn connection(&self) -> MultiplexedConnection {
        self.connection.clone()
    }

    /// Liveness probe
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.connection();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    /// Release resources during teardown. The multiplexed connection closes
    /// when the last clone drops.
    pub async fn close(&self) -> Result<()> {
        info!("Closing store connection");
        Ok(())
    }

    /// Mask the password when logging store URLs
    pub(crate) fn sanitize_url(url: &str) -> String {
        if let Ok(parsed) = url::Url::parse(url) {
            let mut sanitized = parsed.clone();
            if sanitized.password().is_some() {
                let _ = sanitized.set_password(Some("***"));
            }
            sanitized.to_string()
        } else {
            "invalid_url".to_string()
        }
    }
}
