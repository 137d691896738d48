//! Atomic sliding-window accounting
//!
//! The prune/count/insert/expire sequence runs as one server-side script;
//! the store's command order is the serialization point for concurrent
//! admissions across replicas. Splitting it into separate commands would
//! let two replicas admit past the cap.

use super::types::WindowSnapshot;
use crate::config::models::rules::RateLimitRule;
use crate::storage::RedisPool;
use crate::utils::error::Result;
use uuid::Uuid;

/// Key prefix for window logs
const WINDOW_KEY_PREFIX: &str = "swl";

/// Prunes entries at or before the window start (closed-open leading edge),
/// admits the candidate when capacity remains, refreshes the log expiry,
/// and reports the pre-admission count with the oldest retained timestamp.
const SLIDING_WINDOW_SCRIPT: &str = r#"
local key = KEYS[1]
local now = tonumber(ARGV[1])
local window_start = tonumber(ARGV[2])
local max_points = tonumber(ARGV[3])
local ttl = tonumber(ARGV[4])
local member = ARGV[5]

redis.call('ZREMRANGEBYSCORE', key, 0, window_start)
local count = redis.call('ZCARD', key)
if count < max_points then
    redis.call('ZADD', key, now, member)
    redis.call('EXPIRE', key, ttl)
end
local oldest = redis.call('ZRANGE', key, 0, 0, 'WITHSCORES')
if oldest[2] then
    return {count, tonumber(oldest[2])}
end
return {count, now}
"#;

/// Runs the atomic window update for one (rule, client) pair
#[derive(Debug, Clone)]
pub struct WindowAccountant {
    store: RedisPool,
}

impl WindowAccountant {
    pub fn new(store: RedisPool) -> Self {
        Self { store }
    }

    /// Atomically account one candidate admission against the window log of
    /// `(rule_index, client_key)` at time `now_ms`.
    ///
    /// The returned count is the cardinality before the candidate was
    /// added, so the caller's admission condition is `count < points`. A
    /// rejected candidate leaves the log untouched apart from the prune.
    pub async fn evaluate(
        &self,
        rule_index: usize,
        client_key: &str,
        rule: &RateLimitRule,
        now_ms: i64,
    ) -> Result<WindowSnapshot> {
        let key = window_key(rule_index, client_key);
        let member = window_member(now_ms);

        let now_arg = now_ms.to_string();
        let start_arg = (now_ms - rule.duration_ms()).to_string();
        let points_arg = rule.points.to_string();
        let ttl_arg = rule.log_ttl_secs().to_string();

        let (count, oldest_ms): (u32, i64) = self
            .store
            .eval_script(
                SLIDING_WINDOW_SCRIPT,
                &[key.as_str()],
                &[
                    now_arg.as_str(),
                    start_arg.as_str(),
                    points_arg.as_str(),
                    ttl_arg.as_str(),
                    member.as_str(),
                ],
            )
            .await?;

        Ok(WindowSnapshot { count, oldest_ms })
    }
}

/// Window-log key for one (rule, client) pair
pub(super) fn window_key(rule_index: usize, client_key: &str) -> String {
    format!("{}:{}:{}", WINDOW_KEY_PREFIX, rule_index, client_key)
}

/// Member strings need only be unique among concurrent inserts sharing one
/// timestamp.
pub(super) fn window_member(now_ms: i64) -> String {
    format!("{}:{}", now_ms, Uuid::new_v4())
}
