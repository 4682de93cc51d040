//! News article entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// A news article as stored in `news_articles`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub summary: Option<String>,
    /// Structured `{ headline, subheadline, .. }` object, if any.
    pub headline: Option<Value>,
    pub published_at: DateTime<Utc>,
    pub notified: bool,
}

impl NewsArticle {
    /// Creates an article that has not been notified yet.
    pub fn new(
        id: String,
        title: String,
        summary: Option<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            summary,
            headline: None,
            published_at,
            notified: false,
        }
    }

    /// Returns true if the article is older than `cutoff`.
    ///
    /// Matches the retention comparison: an article published exactly at the
    /// cutoff is kept.
    pub fn is_published_before(&self, cutoff: DateTime<Utc>) -> bool {
        self.published_at < cutoff
    }
}
