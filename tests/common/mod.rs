//! Common test utilities for rategate
//!
//! Integration tests drive a full actix App against the Redis named by
//! `REDIS_URL`; without it they skip.

#![allow(dead_code)]

use rategate::config::models::rules::{config_key, RateLimitRule, RuleSet};
use rategate::config::{Config, RedisConfig};
use rategate::server::AppState;
use rategate::storage::RedisPool;
use uuid::Uuid;

/// Skip the test if the environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}

/// Config pointing at the test store
pub fn test_config() -> Config {
    let url = std::env::var("REDIS_URL").expect("REDIS_URL must be set");
    Config {
        redis: RedisConfig {
            url,
            ..RedisConfig::default()
        },
        ..Config::default()
    }
}

/// Fresh gateway state connected to the test store
pub async fn test_state() -> AppState {
    AppState::new(test_config())
        .await
        .expect("connect to test store")
}

/// Unique application id so tests are isolated on a shared store
pub fn unique_app_id(prefix: &str) -> String {
    format!("{}{}", prefix, &Uuid::new_v4().simple().to_string()[..8])
}

/// Seed a rule-set record for an application id
pub async fn seed_rules(store: &RedisPool, app_id: &str, rules: Vec<RateLimitRule>) {
    let record = RuleSet::new(rules);
    store
        .set(
            &config_key(&app_id.to_lowercase()),
            &serde_json::to_string(&record).unwrap(),
            None,
        )
        .await
        .expect("seed rule set");
}

/// Seed a raw (possibly malformed) record for an application id
pub async fn seed_raw(store: &RedisPool, app_id: &str, raw: &str) {
    store
        .set(&config_key(&app_id.to_lowercase()), raw, None)
        .await
        .expect("seed raw record");
}

/// Remove an application id's record
pub async fn delete_rules(store: &RedisPool, app_id: &str) {
    store
        .delete(&config_key(&app_id.to_lowercase()))
        .await
        .expect("delete rule set");
}

/// Read a response header as a string
pub fn header_value<B>(res: &actix_web::dev::ServiceResponse<B>, name: &str) -> Option<String> {
    res.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
