//! Plain key-value operations
//!
//! The admission core only reads through `get`; the writes exist for the
//! seeder and the test harness.

use super::pool::RedisPool;
use crate::utils::error::{LimiterError, Result};
use redis::{AsyncCommands, RedisResult};

impl RedisPool {
    /// Get a single string value
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection();
        let result: RedisResult<String> = conn.get(key).await;
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == redis::ErrorKind::TypeError => Ok(None),
            Err(e) => Err(LimiterError::Store(e)),
        }
    }

    /// Set a key-value pair with an optional TTL in seconds
    pub async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> Result<()> {
        let mut conn = self.connection();
        if let Some(ttl_seconds) = ttl {
            let _: () = conn.set_ex(key, value, ttl_seconds).await?;
        } else {
            let _: () = conn.set(key, value).await?;
        }
        Ok(())
    }

    /// Delete a key
    pub async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.connection();
        let _: () = conn.del(key).await?;
        Ok(())
    }
}
