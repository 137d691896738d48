//! Sliding-window rule sets
//!
//! Rule sets live in the shared store as JSON records keyed by application
//! identifier and are resolved on every request, so edits propagate without
//! restarting the gateway.

use crate::utils::error::{LimiterError, Result};
use serde::{Deserialize, Serialize};

/// Key prefix for stored rule-set records
pub const CONFIG_KEY_PREFIX: &str = "rateLimitConfig:";

/// Identifier of the fallback rule set
pub const DEFAULT_CONFIG_ID: &str = "default";

/// A single sliding-window constraint: at most `points` admissions within
/// any trailing window of `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitRule {
    /// Maximum admissions inside the window
    pub points: u32,
    /// Window length in seconds
    pub duration: u64,
}

impl RateLimitRule {
    /// Window length in milliseconds
    pub fn duration_ms(&self) -> i64 {
        self.duration as i64 * 1000
    }

    /// Store-side expiry for the window log, in seconds
    pub fn log_ttl_secs(&self) -> u64 {
        self.duration + 1
    }
}

/// An ordered, non-empty sequence of rules evaluated conjunctively per
/// request. Order doubles as the tie-break for strictest-rule selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Rules in evaluation order
    pub rules: Vec<RateLimitRule>,
}

impl RuleSet {
    /// Wrap rules into a set; call `validate` before enforcing it
    pub fn new(rules: Vec<RateLimitRule>) -> Self {
        Self { rules }
    }

    /// Parse a stored record and validate it.
    ///
    /// Fractional or negative values fail integer deserialization and are
    /// reported as malformed rather than coerced.
    pub fn parse(raw: &str) -> Result<Self> {
        let set: RuleSet =
            serde_json::from_str(raw).map_err(|e| LimiterError::ConfigMalformed(e.to_string()))?;
        set.validate()?;
        Ok(set)
    }

    /// Reject empty sets and non-positive rule values
    pub fn validate(&self) -> Result<()> {
        if self.rules.is_empty() {
            return Err(LimiterError::ConfigInvalid("rule set is empty".to_string()));
        }
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.points == 0 {
                return Err(LimiterError::ConfigInvalid(format!(
                    "rule {}: points must be positive",
                    index
                )));
            }
            if rule.duration == 0 {
                return Err(LimiterError::ConfigInvalid(format!(
                    "rule {}: duration must be positive",
                    index
                )));
            }
        }
        Ok(())
    }

    /// Number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the set holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Store key for an identifier's rule-set record
pub fn config_key(identifier: &str) -> String {
    format!("{}{}", CONFIG_KEY_PREFIX, identifier)
}
