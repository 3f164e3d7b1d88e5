//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::Health;

const SUCCESS_STATUS: &str = "success";
const HEALTHY_MESSAGE: &str = "API is healthy";

/// Reports that the API is up.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response
///
/// ```json
/// {
///   "status": "success",
///   "message": "API is healthy",
///   "timestamp": "2024-05-01T12:34:56"
/// }
/// ```
///
/// The handler touches no dependencies. A panic while building the response
/// is turned into an empty 500 by the router's panic layer.
pub async fn health_handler() -> Json<Health> {
    Json(Health::new(SUCCESS_STATUS, HEALTHY_MESSAGE))
}
