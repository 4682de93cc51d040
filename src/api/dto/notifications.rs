//! DTO for the notification dispatch endpoint.

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::application::services::DispatchReport;

/// Response for `POST /send-news-notifications`.
///
/// Counters are omitted when nothing was sent.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub success: bool,
    pub articles: Option<usize>,
    pub successful: Option<usize>,
    pub failed: Option<usize>,
    pub message: String,
}

impl From<DispatchReport> for NotificationResponse {
    fn from(report: DispatchReport) -> Self {
        let message = report.message();

        match report {
            DispatchReport::Sent(summary) => Self {
                success: true,
                articles: Some(summary.articles),
                successful: Some(summary.successful),
                failed: Some(summary.failed),
                message,
            },
            DispatchReport::NoArticles | DispatchReport::NoTokens { .. } => Self {
                success: true,
                articles: None,
                successful: None,
                failed: None,
                message,
            },
        }
    }
}
