//! Application state shared across HTTP handlers
//!
//! All fields are cheap to clone; nothing here is mutated after startup.
//! Per-client admission state lives in the store, never in this struct.

use crate::config::Config;
use crate::core::limiter::{RuleResolver, WindowAccountant};
use crate::storage::RedisPool;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers and middleware
#[derive(Clone)]
pub struct AppState {
    /// Process configuration (shared read-only)
    pub config: Arc<Config>,
    /// Shared store connection
    pub store: RedisPool,
    /// Per-identifier rule-set resolution
    pub resolver: RuleResolver,
    /// Atomic window accounting
    pub accountant: WindowAccountant,
}

impl AppState {
    /// Connect the store and assemble the shared state
    pub async fn new(config: Config) -> Result<Self> {
        let store = RedisPool::new(&config.redis).await?;
        Ok(Self::with_store(config, store))
    }

    /// Assemble state around an existing store connection
    pub fn with_store(config: Config, store: RedisPool) -> Self {
        Self {
            config: Arc::new(config),
            resolver: RuleResolver::new(store.clone()),
            accountant: WindowAccountant::new(store.clone()),
            store,
        }
    }
}
