//! API route configuration.
//!
//! All endpoints are public; there is no authentication layer.

use crate::api::handlers::{create_student_handler, health_handler, list_students_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, mounted under `/api` by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `GET  /health`   - Liveness check with a timestamp
/// - `GET  /students` - List every student
/// - `POST /students` - Register a student
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler)).route(
        "/students",
        get(list_students_handler).post(create_student_handler),
    )
}
