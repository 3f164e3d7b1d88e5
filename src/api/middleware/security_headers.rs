//! Security response headers.
//!
//! Every response, errors and panics included, carries:
//!
//! - `X-Frame-Options: SAMEORIGIN`
//! - `X-Content-Type-Options: nosniff`
//! - `Strict-Transport-Security: max-age=31536000; includeSubDomains`
//! - `Referrer-Policy: strict-origin-when-cross-origin`

use axum::Router;
use axum::http::{HeaderName, HeaderValue, header};
use tower_http::set_header::SetResponseHeaderLayer;

const HEADERS: [(HeaderName, &str); 4] = [
    (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (
        header::STRICT_TRANSPORT_SECURITY,
        "max-age=31536000; includeSubDomains",
    ),
    (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
];

/// Wraps the router so that every response carries the security headers.
pub fn apply(router: Router) -> Router {
    HEADERS.into_iter().fold(router, |router, (name, value)| {
        router.layer(SetResponseHeaderLayer::overriding(
            name,
            HeaderValue::from_static(value),
        ))
    })
}
