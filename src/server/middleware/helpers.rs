//! Helper functions for the admission middleware

use crate::core::limiter::AdmissionDecision;
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};

/// Fallback identifier when the path parameter is absent or empty
const UNKNOWN_APPLICATION: &str = "unknown";

/// Case-fold an application identifier. Absent or empty identifiers
/// collapse into the shared `unknown` bucket.
pub fn normalize_application_id(raw: Option<&str>) -> String {
    match raw {
        Some(id) if !id.trim().is_empty() => id.trim().to_lowercase(),
        _ => UNKNOWN_APPLICATION.to_string(),
    }
}

/// Partitioning key for window logs: remote address plus application id.
/// Two requests share a window iff they share this key and a rule index.
pub fn client_key(remote_addr: &str, application_id: &str) -> String {
    format!("{}:{}", remote_addr, application_id)
}

/// The four quota headers derived from a decision
pub fn quota_headers(decision: &AdmissionDecision) -> [(HeaderName, HeaderValue); 4] {
    [
        (
            HeaderName::from_static("x-ratelimit-limit"),
            HeaderValue::from(decision.limit),
        ),
        (
            HeaderName::from_static("x-ratelimit-remaining"),
            HeaderValue::from(decision.remaining),
        ),
        (
            HeaderName::from_static("x-ratelimit-reset"),
            HeaderValue::from(decision.reset_at_ms),
        ),
        (
            HeaderName::from_static("retry-after"),
            HeaderValue::from(decision.retry_after_secs),
        ),
    ]
}

/// Stamp the quota headers onto a response
pub fn apply_quota_headers(headers: &mut HeaderMap, decision: &AdmissionDecision) {
    for (name, value) in quota_headers(decision) {
        headers.insert(name, value);
    }
}
