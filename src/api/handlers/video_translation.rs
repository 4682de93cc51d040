//! Handler for the video insert webhook.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;

use crate::api::dto::video_webhook::{
    NO_ID_MESSAGE, NO_RECORD_MESSAGE, VideoTranslationResponse, VideoWebhookPayload,
};
use crate::error::AppError;
use crate::state::AppState;

/// Translates a newly inserted video and upserts one row per language.
///
/// # Endpoint
///
/// `POST /auto-translate-video`
///
/// # Request Body
///
/// Database webhook envelope; only `record` is read:
///
/// ```json
/// {
///   "type": "INSERT",
///   "table": "video_articles",
///   "schema": "public",
///   "record": { "id": "v1", "title": "Launch day", "source_name": "Daily News", "platform_name": "YouTube" },
///   "old_record": null
/// }
/// ```
///
/// Per-language write failures do not fail the request; they show up as
/// `success: false` in `results`.
///
/// # Errors
///
/// - **400**: `record` or `record.id` missing
/// - **500**: body is not valid JSON
pub async fn auto_translate_video_handler(
    State(state): State<AppState>,
    payload: Result<Json<VideoWebhookPayload>, JsonRejection>,
) -> Result<Json<VideoTranslationResponse>, AppError> {
    let Json(payload) = payload?;

    let record = payload
        .record
        .ok_or_else(|| AppError::bad_request(NO_RECORD_MESSAGE, json!({ "field": "record" })))?;

    let video_id = record
        .id
        .clone()
        .filter(|id| !id.is_blank())
        .ok_or_else(|| AppError::bad_request(NO_ID_MESSAGE, json!({ "field": "record.id" })))?;

    tracing::info!(
        video_id = %video_id,
        event = payload.event_type.as_deref().unwrap_or("unknown"),
        table = payload.table.as_deref().unwrap_or("unknown"),
        "Video webhook received"
    );

    let report = state
        .video_translation_service
        .translate_and_store(&record.to_record(&video_id))
        .await;

    Ok(Json(VideoTranslationResponse::new(video_id, report)))
}
