//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
    pub pipeline: PipelineSummary,
}

/// Health status for each system component.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Active pipeline settings.
#[derive(Debug, Serialize)]
pub struct PipelineSummary {
    pub fanout_languages: String,
    pub supported_languages: String,
    pub retention_days: i64,
    pub retention_strategy: String,
}
