//! Rule-set resolution
//!
//! Rule sets are re-read from the store on every request so configuration
//! edits propagate without restarts. At most two reads per call; errors
//! never carry partial sets.

use crate::config::models::rules::{config_key, RuleSet, DEFAULT_CONFIG_ID};
use crate::storage::RedisPool;
use crate::utils::error::{LimiterError, Result};
use tracing::debug;

/// Resolves the ordered rule set for an application identifier
#[derive(Debug, Clone)]
pub struct RuleResolver {
    store: RedisPool,
}

impl RuleResolver {
    pub fn new(store: RedisPool) -> Self {
        Self { store }
    }

    /// Load the rule set for `identifier`, falling back to the default
    /// record when no per-identifier record exists.
    pub async fn resolve(&self, identifier: &str) -> Result<RuleSet> {
        let identifier = identifier.to_lowercase();
        let raw = match self.store.get(&config_key(&identifier)).await? {
            Some(value) => value,
            None => {
                debug!("No rule set for {}, falling back to default", identifier);
                self.store
                    .get(&config_key(DEFAULT_CONFIG_ID))
                    .await?
                    .ok_or(LimiterError::ConfigMissing)?
            }
        };
        RuleSet::parse(&raw)
    }
}
