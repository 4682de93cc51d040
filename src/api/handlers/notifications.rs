//! Handler for push notification dispatch.

use axum::{Json, extract::State};

use crate::api::dto::notifications::NotificationResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Notifies every registered device about the newest unannounced articles.
///
/// # Endpoint
///
/// `POST /send-news-notifications`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "articles": 2,
///   "successful": 5,
///   "failed": 1,
///   "message": "Notifications sent for 2 articles - 5 successful, 1 failed"
/// }
/// ```
///
/// With nothing pending the message is `No new articles`; with no registered
/// devices it is `No user tokens found` and the articles stay pending.
///
/// # Errors
///
/// - **500**: article or token lookup, or the final bulk update, failed
pub async fn send_notifications_handler(
    State(state): State<AppState>,
) -> Result<Json<NotificationResponse>, AppError> {
    let report = state.notification_service.dispatch().await?;

    Ok(Json(report.into()))
}
