//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /translate`               - Single-text translation (rate limited)
//! - `POST /auto-translate-news`     - Article fan-out translation
//! - `POST /auto-translate-video`    - Video fan-out translation with storage
//! - `POST /send-news-notifications` - Push dispatch
//! - `POST /delete-old-news`         - Retention sweep
//! - `GET  /health`                  - Health check
//!
//! # Middleware
//!
//! - **CORS** - Any origin; preflights answered without reaching handlers
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on client routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let client_router = rate_limit::apply(api::routes::client_routes(), behind_proxy);

    let router = service_router(client_router, state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Builds the router around `client_router` with every other route and the
/// shared layers.
///
/// Integration tests pass the bare client routes, since the limiter needs a
/// peer address that in-process test requests do not carry.
pub fn service_router(client_router: Router<AppState>, state: AppState) -> Router {
    Router::new()
        .merge(client_router)
        .merge(api::routes::webhook_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
