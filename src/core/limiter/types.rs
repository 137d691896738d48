//! Admission core types

/// Observation returned by one atomic window update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSnapshot {
    /// Cardinality of the window log before the candidate was added
    pub count: u32,
    /// Lowest-scored timestamp retained in the log, in ms since epoch
    pub oldest_ms: i64,
}
