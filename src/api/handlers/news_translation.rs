//! Handler for article fan-out translation.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use validator::Validate;

use crate::api::dto::news_translation::{
    NewsTranslationItem, NewsTranslationRequest, NewsTranslationResponse, REQUIRED_MESSAGE,
};
use crate::api::dto::required_fields_error;
use crate::error::AppError;
use crate::state::AppState;

/// Translates an article into every fan-out language and returns the results.
///
/// # Endpoint
///
/// `POST /auto-translate-news`
///
/// # Request Body
///
/// ```json
/// {
///   "article_id": "a1b2",
///   "title": "Rains hit the coast",
///   "summary": "Heavy rain is expected through Friday.",
///   "headline": { "headline": "Storm warning", "subheadline": "Coast on alert", "color": "red" }
/// }
/// ```
///
/// Nothing is stored. Each language runs one call per non-empty field, with a
/// pause between languages, so a full run takes several seconds.
///
/// # Errors
///
/// - **400**: `article_id` missing or empty
/// - **500**: body is not valid JSON
pub async fn auto_translate_news_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewsTranslationRequest>, JsonRejection>,
) -> Result<Json<NewsTranslationResponse>, AppError> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|e| required_fields_error(REQUIRED_MESSAGE, e))?;

    let Some(article_id) = payload.article_id.clone() else {
        return Err(AppError::bad_request(REQUIRED_MESSAGE, json!({})));
    };

    tracing::info!(article_id = %article_id, "Translating article");

    let record = payload.to_record(&article_id);
    let results = state.translation_service.translate_record(&record).await;

    let translations = results
        .iter()
        .map(|result| NewsTranslationItem::from_result(result, payload.headline.as_ref()))
        .collect();

    Ok(Json(NewsTranslationResponse {
        success: true,
        article_id,
        translations,
    }))
}
