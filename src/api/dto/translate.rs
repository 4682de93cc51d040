//! DTOs for the single-text translation endpoint.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

use crate::application::services::SingleTranslation;

/// Message returned when either field is missing or empty.
pub const REQUIRED_MESSAGE: &str = "Text and target_language are required";

/// Request body for `POST /translate`.
#[derive(Debug, Deserialize, Validate)]
pub struct TranslateRequest {
    #[validate(required, length(min = 1))]
    pub text: Option<String>,

    #[validate(required, length(min = 1))]
    pub target_language: Option<String>,
}

/// Response for `POST /translate`.
///
/// `error` is present only when the translation endpoint was unreachable;
/// `translated_text` then equals `original_text`.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub original_text: String,
    pub target_language: String,
    pub error: Option<String>,
}

impl From<SingleTranslation> for TranslateResponse {
    fn from(result: SingleTranslation) -> Self {
        Self {
            translated_text: result.translated_text,
            original_text: result.original_text,
            target_language: result.target_language.to_string(),
            error: result.error.map(str::to_string),
        }
    }
}
