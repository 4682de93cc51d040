//! DTO for the retention sweep endpoint.

use chrono::SecondsFormat;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::application::services::SweepReport;
use crate::domain::entities::NewsArticle;

/// Response for `POST /delete-old-news`.
///
/// `deleted_articles` is present only for the `filter` strategy.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct RetentionResponse {
    pub success: bool,
    pub message: String,
    pub deleted_count: u64,
    /// RFC 3339 with millisecond precision, e.g. `2025-03-08T12:00:00.000Z`.
    pub cutoff_date: String,
    pub strategy: String,
    pub deleted_articles: Option<Vec<NewsArticle>>,
}

impl From<SweepReport> for RetentionResponse {
    fn from(report: SweepReport) -> Self {
        Self {
            success: true,
            message: report.message(),
            deleted_count: report.deleted_count,
            cutoff_date: report.cutoff.to_rfc3339_opts(SecondsFormat::Millis, true),
            strategy: report.strategy.to_string(),
            deleted_articles: report.deleted_articles,
        }
    }
}
