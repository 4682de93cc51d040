//! PostgreSQL implementation of the video translation repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::VideoTranslation;
use crate::domain::repositories::TranslationRepository;
use crate::error::AppError;

/// PostgreSQL repository for `video_translations`.
///
/// Writes use `ON CONFLICT (video_article_id, language_code) DO UPDATE`, so
/// re-running a translation replaces the previous row.
pub struct PgTranslationRepository {
    pool: Arc<PgPool>,
}

impl PgTranslationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TranslationRepository for PgTranslationRepository {
    async fn upsert(&self, translation: &VideoTranslation) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO video_translations (
                video_article_id,
                language_code,
                translated_title,
                translated_source_name,
                translated_platform_name,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (video_article_id, language_code) DO UPDATE SET
                translated_title = EXCLUDED.translated_title,
                translated_source_name = EXCLUDED.translated_source_name,
                translated_platform_name = EXCLUDED.translated_platform_name,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(&translation.video_article_id)
        .bind(translation.language_code.as_str())
        .bind(&translation.translated_title)
        .bind(&translation.translated_source_name)
        .bind(&translation.translated_platform_name)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn count_for_video(&self, video_article_id: &str) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM video_translations WHERE video_article_id = $1")
                .bind(video_article_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }
}
