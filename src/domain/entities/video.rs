//! Video article translation rows.

use crate::domain::entities::LanguageCode;

/// Field names translated for a video article.
pub const VIDEO_TITLE: &str = "title";
pub const VIDEO_SOURCE_NAME: &str = "source_name";
pub const VIDEO_PLATFORM_NAME: &str = "platform_name";

/// Row written to `video_translations`, unique per
/// (`video_article_id`, `language_code`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoTranslation {
    pub video_article_id: String,
    pub language_code: LanguageCode,
    pub translated_title: Option<String>,
    pub translated_source_name: Option<String>,
    pub translated_platform_name: Option<String>,
}
