//! HTTP middleware implementations

mod helpers;
mod rate_limit;


pub use helpers::{apply_quota_headers, client_key, normalize_application_id, quota_headers};
pub use rate_limit::{RateLimitMiddleware, RateLimitMiddlewareService};
