//! PostgreSQL implementation of the article repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::NewsArticle;
use crate::domain::repositories::ArticleRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    title: String,
    summary: Option<String>,
    headline: Option<Value>,
    published_at: DateTime<Utc>,
    notified: bool,
}

impl From<ArticleRow> for NewsArticle {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            summary: row.summary,
            headline: row.headline,
            published_at: row.published_at,
            notified: row.notified,
        }
    }
}

/// PostgreSQL repository for `news_articles`.
pub struct PgArticleRepository {
    pool: Arc<PgPool>,
}

impl PgArticleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn fetch_unnotified(&self, limit: i64) -> Result<Vec<NewsArticle>, AppError> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, summary, headline, published_at, notified
            FROM news_articles
            WHERE notified = FALSE
            ORDER BY published_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(NewsArticle::from).collect())
    }

    async fn mark_notified(&self, ids: &[String]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query("UPDATE news_articles SET notified = TRUE WHERE id = ANY($1)")
            .bind(ids)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_published_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<NewsArticle>, AppError> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            DELETE FROM news_articles
            WHERE published_at < $1
            RETURNING id, title, summary, headline, published_at, notified
            "#,
        )
        .bind(cutoff)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(NewsArticle::from).collect())
    }

    async fn purge_via_procedure(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let deleted: i64 = sqlx::query_scalar("SELECT delete_old_news($1)")
            .bind(cutoff)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(u64::try_from(deleted).unwrap_or(0))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
