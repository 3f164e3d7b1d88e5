//! HTTP middleware for request processing.
//!
//! Provides observability, panic isolation and security headers.

pub mod catch_panic;
pub mod security_headers;
pub mod tracing;
