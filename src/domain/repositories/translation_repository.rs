//! Repository trait for stored video translations.

use crate::domain::entities::VideoTranslation;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `video_translations` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTranslationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_translation.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Inserts or overwrites the row for
    /// (`video_article_id`, `language_code`).
    ///
    /// Running it twice with the same key leaves exactly one row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert(&self, translation: &VideoTranslation) -> Result<(), AppError>;

    /// Counts stored rows for a video article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_for_video(&self, video_article_id: &str) -> Result<i64, AppError>;
}
