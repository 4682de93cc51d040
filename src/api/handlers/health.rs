//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse, PipelineSummary};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" }
///   },
///   "pipeline": {
///     "fanout_languages": "hi,es,ur,zh,fr,ja",
///     "supported_languages": "en,hi,es,fr,de,zh,ar,ja,ko,ru",
///     "retention_days": 7,
///     "retention_strategy": "filter"
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let healthy = db_check.status == "ok";

    let translations = &state.translation_service;
    let retention = &state.retention_service;

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database: db_check },
        pipeline: PipelineSummary {
            fanout_languages: translations.fanout_languages().to_string(),
            supported_languages: translations.supported_languages().to_string(),
            retention_days: retention.window().num_days(),
            retention_strategy: retention.strategy().to_string(),
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    if state.article_repository.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Connected".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Database connection failed".to_string()),
        }
    }
}
