//! Video article translation with upsert persistence.

use std::sync::Arc;

use crate::application::services::TranslationService;
use crate::domain::entities::video::{VIDEO_PLATFORM_NAME, VIDEO_SOURCE_NAME, VIDEO_TITLE};
use crate::domain::entities::{LanguageCode, TranslatableRecord, TranslationResult, VideoTranslation};
use crate::domain::repositories::TranslationRepository;

/// What happened to one language of a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOutcome {
    pub language: LanguageCode,
    /// True if the translated row was stored.
    pub success: bool,
    /// True if the translated row failed and an untranslated row was stored
    /// in its place.
    pub fallback_written: bool,
    pub title_translated: bool,
    pub source_name_translated: bool,
    pub platform_name_translated: bool,
}

/// Summary of one video translation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoTranslationReport {
    pub video_id: String,
    pub total_languages: usize,
    pub translations_created: usize,
    /// Rows found for the video after the run; `None` if the read-back failed.
    pub verified_count: Option<i64>,
    pub outcomes: Vec<LanguageOutcome>,
}

/// Translates a video record and stores one row per language.
pub struct VideoTranslationService {
    translations: Arc<TranslationService>,
    repository: Arc<dyn TranslationRepository>,
}

impl VideoTranslationService {
    /// Creates a new video translation service.
    pub fn new(
        translations: Arc<TranslationService>,
        repository: Arc<dyn TranslationRepository>,
    ) -> Self {
        Self {
            translations,
            repository,
        }
    }

    /// Runs fan-out translation and persists every language.
    ///
    /// A failed write for one language is logged, followed by an attempt to
    /// store the untranslated originals for that language; other languages
    /// are unaffected. The final read-back count is informational only.
    pub async fn translate_and_store(&self, record: &TranslatableRecord) -> VideoTranslationReport {
        let results = self.translations.translate_record(record).await;
        let total_languages = results.len();

        let mut translations_created = 0;
        let mut outcomes = Vec::with_capacity(total_languages);

        for result in &results {
            let row = translated_row(result);

            let (success, fallback_written) = match self.repository.upsert(&row).await {
                Ok(()) => {
                    translations_created += 1;
                    tracing::debug!(video_id = %record.id, language = %result.language, "Stored video translation");
                    (true, false)
                }
                Err(e) => {
                    tracing::warn!(
                        video_id = %record.id,
                        language = %result.language,
                        error = %e,
                        "Failed to store video translation"
                    );
                    (false, self.store_fallback(record, &result.language).await)
                }
            };

            outcomes.push(LanguageOutcome {
                language: result.language.clone(),
                success,
                fallback_written,
                title_translated: result.was_translated(VIDEO_TITLE),
                source_name_translated: result.was_translated(VIDEO_SOURCE_NAME),
                platform_name_translated: result.was_translated(VIDEO_PLATFORM_NAME),
            });
        }

        let verified_count = match self.repository.count_for_video(&record.id).await {
            Ok(count) => Some(count),
            Err(e) => {
                tracing::warn!(video_id = %record.id, error = %e, "Read-back of video translations failed");
                None
            }
        };

        tracing::info!(
            video_id = %record.id,
            translations_created,
            total_languages,
            verified_count = ?verified_count,
            "Video translation finished"
        );

        VideoTranslationReport {
            video_id: record.id.clone(),
            total_languages,
            translations_created,
            verified_count,
            outcomes,
        }
    }

    async fn store_fallback(&self, record: &TranslatableRecord, language: &LanguageCode) -> bool {
        let fallback = original_row(record, language);

        match self.repository.upsert(&fallback).await {
            Ok(()) => {
                tracing::info!(video_id = %record.id, language = %language, "Stored untranslated fallback row");
                true
            }
            Err(e) => {
                tracing::error!(
                    video_id = %record.id,
                    language = %language,
                    error = %e,
                    "Failed to store fallback row"
                );
                false
            }
        }
    }
}

fn translated_row(result: &TranslationResult) -> VideoTranslation {
    VideoTranslation {
        video_article_id: result.record_id.clone(),
        language_code: result.language.clone(),
        translated_title: result.text(VIDEO_TITLE),
        translated_source_name: result.text(VIDEO_SOURCE_NAME),
        translated_platform_name: result.text(VIDEO_PLATFORM_NAME),
    }
}

fn original_row(record: &TranslatableRecord, language: &LanguageCode) -> VideoTranslation {
    VideoTranslation {
        video_article_id: record.id.clone(),
        language_code: language.clone(),
        translated_title: record.field(VIDEO_TITLE).map(str::to_string),
        translated_source_name: record.field(VIDEO_SOURCE_NAME).map(str::to_string),
        translated_platform_name: record.field(VIDEO_PLATFORM_NAME).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LanguageSet;
    use crate::domain::repositories::MockTranslationRepository;
    use crate::error::AppError;
    use crate::infrastructure::translate::{MockTranslator, TranslateError};
    use serde_json::json;
    use std::time::Duration;

    fn video() -> TranslatableRecord {
        TranslatableRecord::new("video-9")
            .with_field(VIDEO_TITLE, Some("Launch day".to_string()))
            .with_field(VIDEO_SOURCE_NAME, Some("Daily News".to_string()))
            .with_field(VIDEO_PLATFORM_NAME, None)
    }

    fn translations(translator: MockTranslator, languages: &str) -> Arc<TranslationService> {
        Arc::new(TranslationService::new(
            Arc::new(translator),
            LanguageSet::from_csv(languages).unwrap(),
            LanguageSet::default_supported(),
            Duration::ZERO,
        ))
    }

    #[tokio::test]
    async fn test_stores_one_row_per_language() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .returning(|text, lang| Ok(format!("[{lang}] {text}")));

        let mut repository = MockTranslationRepository::new();
        repository
            .expect_upsert()
            .withf(|row| {
                row.video_article_id == "video-9"
                    && row.translated_title == Some(format!("[{}] Launch day", row.language_code))
                    && row.translated_platform_name.is_none()
            })
            .times(3)
            .returning(|_| Ok(()));
        repository
            .expect_count_for_video()
            .withf(|id| id == "video-9")
            .times(1)
            .returning(|_| Ok(3));

        let service = VideoTranslationService::new(translations(translator, "hi,es,fr"), Arc::new(repository));
        let report = service.translate_and_store(&video()).await;

        assert_eq!(report.total_languages, 3);
        assert_eq!(report.translations_created, 3);
        assert_eq!(report.verified_count, Some(3));
        assert!(report.outcomes.iter().all(|o| o.success && !o.fallback_written));
        assert!(report.outcomes.iter().all(|o| o.title_translated && !o.platform_name_translated));
    }

    #[tokio::test]
    async fn test_unreachable_translator_stores_original_text() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .returning(|_, _| Err(TranslateError::Transport("unreachable".into())));

        let mut repository = MockTranslationRepository::new();
        repository
            .expect_upsert()
            .withf(|row| {
                row.translated_title.as_deref() == Some("Launch day")
                    && row.translated_source_name.as_deref() == Some("Daily News")
            })
            .times(2)
            .returning(|_| Ok(()));
        repository.expect_count_for_video().returning(|_| Ok(2));

        let service = VideoTranslationService::new(translations(translator, "hi,es"), Arc::new(repository));
        let report = service.translate_and_store(&video()).await;

        assert_eq!(report.translations_created, 2);
        assert!(report.outcomes.iter().all(|o| !o.title_translated));
    }

    #[tokio::test]
    async fn test_write_failure_falls_back_and_continues() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .returning(|_, _| Ok("translated".to_string()));

        let mut repository = MockTranslationRepository::new();
        // The translated row for "es" fails; its fallback holds the original title.
        repository
            .expect_upsert()
            .withf(|row| row.language_code.as_str() == "es" && row.translated_title.as_deref() == Some("translated"))
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));
        repository
            .expect_upsert()
            .withf(|row| row.language_code.as_str() == "es" && row.translated_title.as_deref() == Some("Launch day"))
            .times(1)
            .returning(|_| Ok(()));
        repository
            .expect_upsert()
            .withf(|row| row.language_code.as_str() != "es")
            .times(2)
            .returning(|_| Ok(()));
        repository.expect_count_for_video().returning(|_| Ok(3));

        let service = VideoTranslationService::new(translations(translator, "hi,es,fr"), Arc::new(repository));
        let report = service.translate_and_store(&video()).await;

        assert_eq!(report.translations_created, 2);
        assert_eq!(report.outcomes.len(), 3);

        let es = &report.outcomes[1];
        assert_eq!(es.language.as_str(), "es");
        assert!(!es.success);
        assert!(es.fallback_written);
    }

    #[tokio::test]
    async fn test_read_back_failure_is_reported_as_none() {
        let mut translator = MockTranslator::new();
        translator.expect_translate().returning(|_, _| Ok("x".to_string()));

        let mut repository = MockTranslationRepository::new();
        repository.expect_upsert().returning(|_| Ok(()));
        repository
            .expect_count_for_video()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = VideoTranslationService::new(translations(translator, "hi"), Arc::new(repository));
        let report = service.translate_and_store(&video()).await;

        assert_eq!(report.translations_created, 1);
        assert_eq!(report.verified_count, None);
    }
}
