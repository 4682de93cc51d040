//! Rate limiting middleware using token bucket algorithm.
//!
//! Applied to the client-facing `/translate` route only; webhook routes are
//! called by the database and the scheduler and are not limited.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

/// Sustained requests per second per client.
const PER_SECOND: u64 = 2;

/// Requests a client may burst before being limited.
const BURST_SIZE: u32 = 30;

type Layer<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

fn build<K: KeyExtractor>(key_extractor: K) -> Layer<K> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(PER_SECOND)
        .burst_size(BURST_SIZE)
        .key_extractor(key_extractor)
        .finish()
        .expect("rate limit quota is non-zero");

    GovernorLayer::new(Arc::new(governor_conf))
}

/// Creates a limiter keyed on the socket peer address.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn layer() -> Layer<PeerIpKeyExtractor> {
    build(PeerIpKeyExtractor)
}

/// Creates a limiter keyed on `X-Forwarded-For` / `X-Real-IP` / `Forwarded`,
/// falling back to the peer address.
///
/// Use only behind a trusted reverse proxy; clients can forge these headers.
pub fn proxy_layer() -> Layer<SmartIpKeyExtractor> {
    build(SmartIpKeyExtractor)
}

/// Wraps `router` with the limiter matching the deployment.
///
/// Both extractors need `ConnectInfo<SocketAddr>`, so the router must be
/// served with `into_make_service_with_connect_info`.
pub fn apply(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        router.layer(proxy_layer())
    } else {
        router.layer(layer())
    }
}
