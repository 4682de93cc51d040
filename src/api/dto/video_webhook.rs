//! DTOs for the video insert webhook.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record_id::RecordId;
use crate::application::services::{LanguageOutcome, VideoTranslationReport};
use crate::domain::entities::video::{VIDEO_PLATFORM_NAME, VIDEO_SOURCE_NAME, VIDEO_TITLE};
use crate::domain::entities::{LanguageCode, TranslatableRecord};

pub const NO_RECORD_MESSAGE: &str = "No record data received";
pub const NO_ID_MESSAGE: &str = "Video ID is required";

/// Database webhook envelope for `POST /auto-translate-video`.
#[derive(Debug, Deserialize)]
pub struct VideoWebhookPayload {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub table: Option<String>,
    pub schema: Option<String>,
    pub record: Option<VideoRecord>,
    pub old_record: Option<Value>,
}

/// The inserted `video_articles` row; other columns are ignored.
#[derive(Debug, Deserialize)]
pub struct VideoRecord {
    pub id: Option<RecordId>,
    pub title: Option<String>,
    pub source_name: Option<String>,
    pub platform_name: Option<String>,
}

impl VideoRecord {
    pub fn to_record(&self, id: &RecordId) -> TranslatableRecord {
        TranslatableRecord::new(id.to_string())
            .with_field(VIDEO_TITLE, self.title.clone())
            .with_field(VIDEO_SOURCE_NAME, self.source_name.clone())
            .with_field(VIDEO_PLATFORM_NAME, self.platform_name.clone())
    }
}

/// Per-language entry of the webhook response.
#[derive(Debug, Serialize)]
pub struct VideoLanguageResult {
    pub language: LanguageCode,
    pub success: bool,
    pub fallback_written: bool,
    pub title_translated: bool,
    pub source_name_translated: bool,
    pub platform_name_translated: bool,
}

impl From<LanguageOutcome> for VideoLanguageResult {
    fn from(outcome: LanguageOutcome) -> Self {
        Self {
            language: outcome.language,
            success: outcome.success,
            fallback_written: outcome.fallback_written,
            title_translated: outcome.title_translated,
            source_name_translated: outcome.source_name_translated,
            platform_name_translated: outcome.platform_name_translated,
        }
    }
}

/// Response for `POST /auto-translate-video`.
///
/// `verified_count` is `null` when the read-back query failed.
#[derive(Debug, Serialize)]
pub struct VideoTranslationResponse {
    pub success: bool,
    pub video_id: RecordId,
    pub translations_created: usize,
    pub total_languages: usize,
    pub verified_count: Option<i64>,
    pub results: Vec<VideoLanguageResult>,
}

impl VideoTranslationResponse {
    pub fn new(video_id: RecordId, report: VideoTranslationReport) -> Self {
        Self {
            success: true,
            video_id,
            translations_created: report.translations_created,
            total_languages: report.total_languages,
            verified_count: report.verified_count,
            results: report.outcomes.into_iter().map(Into::into).collect(),
        }
    }
}
