//! General-purpose middleware for the API.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use tower_http::cors::CorsLayer;

/// The admin UI is served behind the same proxy, so no cross-origin
/// credentials; this only has to let the public site's fetches through.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60))
}
