//! API route configuration.
//!
//! Routes are split by caller: the mobile app calls `/translate` directly,
//! everything else is triggered by database webhooks or a scheduler.
//! `OPTIONS` is answered by the CORS layer for every path.

use crate::api::handlers::{
    auto_translate_news_handler, auto_translate_video_handler, delete_old_news_handler,
    send_notifications_handler, translate_handler,
};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes called by app clients.
///
/// # Endpoints
///
/// - `POST /translate` - Single-text translation
pub fn client_routes() -> Router<AppState> {
    Router::new().route("/translate", post(translate_handler))
}

/// Routes called by database webhooks and schedulers.
///
/// # Endpoints
///
/// - `POST /auto-translate-news`     - Fan-out translation of an article
/// - `POST /auto-translate-video`    - Fan-out translation of a video, stored per language
/// - `POST /send-news-notifications` - Push new articles to every device
/// - `POST /delete-old-news`         - Retention sweep
pub fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route("/auto-translate-news", post(auto_translate_news_handler))
        .route("/auto-translate-video", post(auto_translate_video_handler))
        .route("/send-news-notifications", post(send_notifications_handler))
        .route("/delete-old-news", post(delete_old_news_handler))
}
