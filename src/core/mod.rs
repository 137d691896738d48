//! Core admission logic

pub mod limiter;
