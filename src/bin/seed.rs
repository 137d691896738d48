//! Rule-set seeding tool
//!
//! Writes `rateLimitConfig` records into the shared store so the gateway
//! has rule sets to resolve. Run it before first start or whenever limits
//! change; the gateway itself never writes these keys.

use clap::Parser;
use rategate::config::models::rules::{config_key, RateLimitRule, RuleSet};
use rategate::config::{Config, RedisConfig};
use rategate::storage::RedisPool;
use rategate::utils::error::LimiterError;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, Level};

/// Seed rate-limit rule sets into the shared store
#[derive(Parser, Debug)]
#[command(name = "seed")]
#[command(version, about, long_about = None)]
struct Args {
    /// Redis URL (falls back to the environment, then to localhost)
    #[arg(long = "redis-url")]
    redis_url: Option<String>,

    /// JSON file mapping application ids to rule sets
    #[arg(long = "file", conflicts_with_all = ["app_id", "points", "duration"])]
    file: Option<PathBuf>,

    /// Single application id to seed ("default" seeds the fallback record)
    #[arg(long = "app-id", requires = "points", requires = "duration")]
    app_id: Option<String>,

    /// Maximum admissions inside the window
    #[arg(long = "points")]
    points: Option<u32>,

    /// Window length in seconds
    #[arg(long = "duration")]
    duration: Option<u64>,
}

#[tokio::main]
async fn main() -> rategate::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();

    let redis = match args.redis_url {
        Some(url) => RedisConfig {
            url,
            ..RedisConfig::default()
        },
        None => Config::from_env()?.redis,
    };
    let store = RedisPool::new(&redis).await?;

    let mut records: BTreeMap<String, RuleSet> = BTreeMap::new();
    if let Some(path) = args.file {
        let content = tokio::fs::read_to_string(&path).await?;
        records.extend(serde_json::from_str::<BTreeMap<String, RuleSet>>(&content)?);
    } else if let (Some(app_id), Some(points), Some(duration)) =
        (args.app_id, args.points, args.duration)
    {
        records.insert(app_id, RuleSet::new(vec![RateLimitRule { points, duration }]));
    } else {
        return Err(LimiterError::Config(
            "either --file or --app-id with --points and --duration is required".to_string(),
        ));
    }

    for (app_id, rule_set) in records {
        rule_set.validate()?;
        let key = config_key(&app_id.to_lowercase());
        store
            .set(&key, &serde_json::to_string(&rule_set)?, None)
            .await?;
        info!("Seeded {} ({} rules)", key, rule_set.len());
    }

    store.close().await?;
    Ok(())
}
