//! CORS policy shared by every endpoint.

use axum::http::{HeaderName, Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Headers the mobile and web clients send.
const ALLOWED_HEADERS: [HeaderName; 4] = [
    header::AUTHORIZATION,
    HeaderName::from_static("x-client-info"),
    HeaderName::from_static("apikey"),
    header::CONTENT_TYPE,
];

/// Creates the CORS layer.
///
/// Any origin is allowed. Preflight requests are answered by the layer
/// itself with status 200 and never reach a handler.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(ALLOWED_HEADERS)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
