//! Error handling for the gateway
//!
//! This module defines all error types used throughout the service.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, LimiterError>;

/// Main error type for the admission gateway
#[derive(Error, Debug)]
pub enum LimiterError {
    /// Neither a per-application nor a default rule set exists
    #[error("Rate limit config not found")]
    ConfigMissing,

    /// A stored rule set exists but does not parse
    #[error("Malformed rate limit config: {0}")]
    ConfigMalformed(String),

    /// A stored rule set parses but violates the validity rules
    #[error("Invalid rate limit config: {0}")]
    ConfigInvalid(String),

    /// Transport, timeout, or protocol failure from the shared store
    #[error("Store error: {0}")]
    Store(#[from] redis::RedisError),

    /// Process configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Missing configuration is an operator deployment error (500); a record
/// that exists but cannot be used, or an unreachable store, is a transient
/// condition (503) the caller may retry after a pause.
impl ResponseError for LimiterError {
    fn status_code(&self) -> StatusCode {
        match self {
            LimiterError::ConfigMissing => StatusCode::INTERNAL_SERVER_ERROR,
            LimiterError::ConfigMalformed(_)
            | LimiterError::ConfigInvalid(_)
            | LimiterError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            LimiterError::Config(_) | LimiterError::Serialization(_) | LimiterError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            LimiterError::ConfigMissing => {
                HttpResponse::InternalServerError().body("Rate limit config not found.")
            }
            LimiterError::ConfigMalformed(_) | LimiterError::ConfigInvalid(_) => {
                HttpResponse::ServiceUnavailable()
                    .insert_header(("Retry-After", "10"))
                    .body("Service Unavailable: Rate limiter config error.")
            }
            LimiterError::Store(_) => HttpResponse::ServiceUnavailable()
                .insert_header(("Retry-After", "10"))
                .body("Service Unavailable: Rate limiter backend error."),
            _ => HttpResponse::InternalServerError().body(self.to_string()),
        }
    }
}
