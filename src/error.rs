//! HTTP-facing error type.
//!
//! Every handler returns `Result<_, AppError>`. Client input problems map to
//! `400 Bad Request`, everything that escaped a per-item boundary maps to
//! `500 Internal Server Error`. Bodies always carry `success: false` and an
//! `error` object so callers can branch on either field.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Human-readable message without the details payload.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. } | AppError::Internal { message, .. } => message,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => {
                ("validation_error", message.clone(), details.clone())
            }
            AppError::Internal { message, details } => {
                ("internal_error", message.clone(), details.clone())
            }
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self.message(), "Request failed");
        }

        let body = ErrorBody {
            success: false,
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
        fields.sort_unstable();
        AppError::bad_request("Validation failed", json!({ "fields": fields }))
    }
}

/// A body that does not parse is an unhandled failure (500), not a client
/// input error.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::internal(rejection.body_text(), json!({}))
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        return AppError::internal(
            "Database error",
            json!({ "reason": db.message(), "constraint": db.constraint() }),
        );
    }

    AppError::internal("Database error", json!({ "reason": e.to_string() }))
}
