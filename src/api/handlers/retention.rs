//! Handler for the retention sweep.

use axum::{Json, extract::State};

use crate::api::dto::retention::RetentionResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes articles older than the retention window.
///
/// # Endpoint
///
/// `POST /delete-old-news`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "message": "Deleted 3 old news articles",
///   "deleted_count": 3,
///   "cutoff_date": "2025-03-08T12:00:00.000Z",
///   "strategy": "filter",
///   "deleted_articles": [ ... ]
/// }
/// ```
///
/// # Errors
///
/// - **500**: the delete failed
pub async fn delete_old_news_handler(
    State(state): State<AppState>,
) -> Result<Json<RetentionResponse>, AppError> {
    let report = state.retention_service.sweep().await?;

    Ok(Json(report.into()))
}
