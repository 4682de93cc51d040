//! Handler for single-text translation.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use validator::Validate;

use crate::api::dto::required_fields_error;
use crate::api::dto::translate::{REQUIRED_MESSAGE, TranslateRequest, TranslateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Translates one text into one supported language.
///
/// # Endpoint
///
/// `POST /translate`
///
/// # Request Body
///
/// ```json
/// { "text": "Hello", "target_language": "es" }
/// ```
///
/// # Response
///
/// ```json
/// { "translated_text": "Hola", "original_text": "Hello", "target_language": "es" }
/// ```
///
/// If the translation endpoint fails, `translated_text` is the input and the
/// status is still 200. When the endpoint is unreachable the body also
/// carries `"error": "Translation failed"`.
///
/// # Errors
///
/// - **400**: `text` or `target_language` missing or empty
/// - **400**: `target_language` outside the supported set
/// - **500**: body is not valid JSON
pub async fn translate_handler(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, AppError> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|e| required_fields_error(REQUIRED_MESSAGE, e))?;

    let (Some(text), Some(target_language)) = (payload.text, payload.target_language) else {
        return Err(AppError::bad_request(REQUIRED_MESSAGE, json!({})));
    };

    let result = state
        .translation_service
        .translate_single(&text, &target_language)
        .await?;

    Ok(Json(result.into()))
}
