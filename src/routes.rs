//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /api/health`   - Health check (public)
//! - `GET  /api/students` - List students (public)
//! - `POST /api/students` - Create a student (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Security headers** - Frame, sniffing, HSTS and referrer policies
//! - **Panic isolation** - Panics become empty 500 responses
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{catch_panic, security_headers, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}

/// The `/api` tree with every middleware except path normalization.
///
/// Panics are caught innermost so the security headers and the trace span
/// still apply to the resulting 500.
pub fn api_router(state: AppState) -> Router {
    let router = Router::new()
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(catch_panic::layer());

    security_headers::apply(router).layer(tracing::layer())
}
