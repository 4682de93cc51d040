//! Repository trait for news article access.

use crate::domain::entities::NewsArticle;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for the `news_articles` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgArticleRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Returns up to `limit` articles with `notified = false`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_unnotified(&self, limit: i64) -> Result<Vec<NewsArticle>, AppError>;

    /// Sets `notified = true` on every article in `ids` with one statement.
    ///
    /// Returns the number of rows updated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn mark_notified(&self, ids: &[String]) -> Result<u64, AppError>;

    /// Deletes every article with `published_at` strictly before `cutoff`
    /// and returns the deleted rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_published_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<NewsArticle>, AppError>;

    /// Calls the `delete_old_news` stored procedure, which applies the same
    /// comparison server-side, and returns its deleted count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or if the procedure
    /// is missing.
    async fn purge_via_procedure(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError>;

    /// Checks if the storage backend answers.
    async fn health_check(&self) -> bool;
}
