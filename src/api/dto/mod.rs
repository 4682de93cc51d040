//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod health;
pub mod news_translation;
pub mod notifications;
pub mod record_id;
pub mod retention;
pub mod translate;
pub mod video_webhook;

use serde_json::json;
use validator::ValidationErrors;

use crate::error::AppError;

/// Maps a failed presence check to a 400 with a fixed message.
///
/// The offending field names are listed in `details.fields`.
pub fn required_fields_error(message: &str, errors: ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();
    let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
    fields.sort_unstable();

    AppError::bad_request(message, json!({ "fields": fields }))
}
