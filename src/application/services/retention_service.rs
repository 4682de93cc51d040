//! Retention sweep for old news articles.

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::entities::NewsArticle;
use crate::domain::repositories::ArticleRepository;
use crate::error::AppError;

/// Default retention window in days.
pub const DEFAULT_RETENTION_DAYS: i64 = 7;

/// How the sweep removes rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetentionStrategy {
    /// Filtered delete issued by the application; returns the deleted rows.
    #[default]
    Filter,
    /// Server-side `delete_old_news` procedure; returns only a count.
    Procedure,
}

impl RetentionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Filter => "filter",
            Self::Procedure => "procedure",
        }
    }
}

impl fmt::Display for RetentionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RetentionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filter" => Ok(Self::Filter),
            "procedure" => Ok(Self::Procedure),
            other => Err(format!(
                "unknown retention strategy '{other}', expected 'filter' or 'procedure'"
            )),
        }
    }
}

/// Result of one sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    pub deleted_count: u64,
    pub cutoff: DateTime<Utc>,
    pub strategy: RetentionStrategy,
    /// Deleted rows; only the filter strategy returns them.
    pub deleted_articles: Option<Vec<NewsArticle>>,
}

impl SweepReport {
    pub fn message(&self) -> String {
        format!("Deleted {} old news articles", self.deleted_count)
    }
}

/// Deletes articles published before `now - window`.
pub struct RetentionService {
    articles: Arc<dyn ArticleRepository>,
    window: Duration,
    strategy: RetentionStrategy,
}

impl RetentionService {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        window: Duration,
        strategy: RetentionStrategy,
    ) -> Self {
        Self {
            articles,
            window,
            strategy,
        }
    }

    pub fn strategy(&self) -> RetentionStrategy {
        self.strategy
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Cutoff for a sweep started at `now`. Rows strictly older are removed.
    pub fn cutoff_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.window
    }

    /// Runs a sweep with the configured strategy against the current clock.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the delete fails.
    pub async fn sweep(&self) -> Result<SweepReport, AppError> {
        self.sweep_at(Utc::now(), self.strategy).await
    }

    /// Runs a sweep as if started at `now`, with an explicit strategy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the delete fails.
    pub async fn sweep_at(
        &self,
        now: DateTime<Utc>,
        strategy: RetentionStrategy,
    ) -> Result<SweepReport, AppError> {
        let cutoff = self.cutoff_at(now);
        tracing::info!(cutoff = %cutoff.to_rfc3339(), strategy = %strategy, "Starting retention sweep");

        let report = match strategy {
            RetentionStrategy::Filter => {
                let deleted = self.articles.delete_published_before(cutoff).await?;
                SweepReport {
                    deleted_count: deleted.len() as u64,
                    cutoff,
                    strategy,
                    deleted_articles: Some(deleted),
                }
            }
            RetentionStrategy::Procedure => {
                let deleted_count = self.articles.purge_via_procedure(cutoff).await?;
                SweepReport {
                    deleted_count,
                    cutoff,
                    strategy,
                    deleted_articles: None,
                }
            }
        };

        metrics::counter!("retention_deleted_total").increment(report.deleted_count);
        tracing::info!(deleted = report.deleted_count, strategy = %strategy, "Retention sweep finished");

        Ok(report)
    }
}
