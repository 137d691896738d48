//! Server-side script evaluation
//!
//! The window accountant composes its read-modify-write as a single EVAL so
//! concurrent replicas cannot interleave inside it.

use super::pool::RedisPool;
use crate::utils::error::Result;

impl RedisPool {
    /// Evaluate a Lua script atomically against the store
    pub async fn eval_script<T: redis::FromRedisValue>(
        &self,
        script: &str,
        keys: &[&str],
        args: &[&str],
    ) -> Result<T> {
        let mut conn = self.connection();
        let mut cmd = redis::cmd("EVAL");
        cmd.arg(script).arg(keys.len());
        for key in keys {
            cmd.arg(*key);
        }
        for arg in args {
            cmd.arg(*arg);
        }
        let result: T = cmd.query_async(&mut conn).await?;
        Ok(result)
    }
}
