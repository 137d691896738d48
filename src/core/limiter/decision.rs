//! Strictest-rule aggregation
//!
//! Pure over the rule set and the per-rule window snapshots, with the clock
//! as an explicit argument, so the composition rules are testable without a
//! store.

use super::types::WindowSnapshot;
use crate::config::models::rules::{RateLimitRule, RuleSet};

/// The admit/reject outcome for one request, labeled with the strictest
/// rule's quota numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionDecision {
    /// Whether any rule rejected the request
    pub blocked: bool,
    /// `points` of the strictest rule
    pub limit: u32,
    /// Post-admission remaining quota under the strictest rule
    pub remaining: u32,
    /// Seconds until the strictest limit next releases capacity
    pub retry_after_secs: i64,
    /// Millisecond epoch timestamp at which capacity next releases
    pub reset_at_ms: i64,
}

impl AdmissionDecision {
    /// Fold per-rule snapshots into one decision.
    ///
    /// Among rejecting rules the one with the largest time-to-reset labels
    /// the response; among admitting rules the smallest post-admission
    /// remaining quota wins. Both comparisons are strict, so ties keep the
    /// earlier rule index. The reject/admit criteria are deliberately
    /// asymmetric; callers depend on the selection being stable across
    /// replicas, not on symmetry.
    pub fn aggregate(rules: &RuleSet, snapshots: &[WindowSnapshot], now_ms: i64) -> Self {
        debug_assert_eq!(rules.len(), snapshots.len());

        let mut blocked = false;
        let mut strictest_index = 0usize;
        let mut strictest_remaining = i64::MAX;
        let mut strictest_reset_secs: i64 = 0;

        for (index, (rule, snapshot)) in rules.rules.iter().zip(snapshots).enumerate() {
            if snapshot.count >= rule.points {
                blocked = true;
                let reset_secs = secs_until_release(rule, snapshot, now_ms);
                if reset_secs > strictest_reset_secs {
                    strictest_reset_secs = reset_secs;
                    strictest_index = index;
                }
                strictest_remaining = 0;
            } else {
                let remaining = i64::from(rule.points) - i64::from(snapshot.count) - 1;
                if remaining < strictest_remaining {
                    strictest_remaining = remaining;
                    strictest_index = index;
                    strictest_reset_secs = rule.duration as i64;
                }
            }
        }

        Self {
            blocked,
            limit: rules.rules[strictest_index].points,
            remaining: strictest_remaining.max(0) as u32,
            retry_after_secs: strictest_reset_secs,
            reset_at_ms: now_ms + strictest_reset_secs * 1000,
        }
    }
}

/// Ceiling of the time, in seconds, until the oldest retained admission
/// leaves the window.
fn secs_until_release(rule: &RateLimitRule, snapshot: &WindowSnapshot, now_ms: i64) -> i64 {
    let release_ms = snapshot.oldest_ms + rule.duration_ms() - now_ms;
    if release_ms <= 0 {
        0
    } else {
        (release_ms + 999) / 1000
    }
}
