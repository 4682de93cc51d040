//! Push notifications for newly published articles.

use std::sync::Arc;

use crate::domain::entities::{DeliveryOutcome, PushMessage};
use crate::domain::repositories::{ArticleRepository, TokenRepository};
use crate::error::AppError;
use crate::infrastructure::messaging::PushSender;
use crate::utils::text::mask_token;

/// Counters for one dispatch run that actually sent messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSummary {
    pub articles: usize,
    pub successful: usize,
    pub failed: usize,
    /// Devices without a usable token, per article.
    pub skipped: usize,
    pub marked_notified: u64,
}

impl DispatchSummary {
    pub fn message(&self) -> String {
        format!(
            "Notifications sent for {} articles - {} successful, {} failed",
            self.articles, self.successful, self.failed
        )
    }
}

/// Result of [`NotificationService::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchReport {
    /// Nothing was waiting to be announced.
    NoArticles,
    /// Articles were waiting but no device is registered; they stay pending.
    NoTokens { articles: usize },
    Sent(DispatchSummary),
}

impl DispatchReport {
    pub fn message(&self) -> String {
        match self {
            Self::NoArticles => "No new articles".to_string(),
            Self::NoTokens { .. } => "No user tokens found".to_string(),
            Self::Sent(summary) => summary.message(),
        }
    }
}

/// Sends one push per (article, device) pair for unannounced articles.
pub struct NotificationService {
    articles: Arc<dyn ArticleRepository>,
    tokens: Arc<dyn TokenRepository>,
    sender: Arc<dyn PushSender>,
    batch_size: i64,
    body_chars: usize,
}

impl NotificationService {
    /// Creates a new notification service.
    ///
    /// - `batch_size` - maximum articles announced per run, newest first
    /// - `body_chars` - characters of the summary kept in the message body
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        tokens: Arc<dyn TokenRepository>,
        sender: Arc<dyn PushSender>,
        batch_size: i64,
        body_chars: usize,
    ) -> Self {
        Self {
            articles,
            tokens,
            sender,
            batch_size,
            body_chars,
        }
    }

    /// Announces pending articles to every registered device.
    ///
    /// Each send is independent: a failure is counted and the loop moves on.
    /// Once every pair has been attempted, all fetched articles are marked
    /// notified in one update, whether or not their sends succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the article or token lookup, or the
    /// final bulk update, fails.
    pub async fn dispatch(&self) -> Result<DispatchReport, AppError> {
        let articles = self.articles.fetch_unnotified(self.batch_size).await?;
        tracing::info!(count = articles.len(), "Fetched unnotified articles");

        if articles.is_empty() {
            return Ok(DispatchReport::NoArticles);
        }

        let targets = self.tokens.list_targets().await?;
        tracing::info!(count = targets.len(), "Fetched device tokens");

        if targets.is_empty() {
            return Ok(DispatchReport::NoTokens {
                articles: articles.len(),
            });
        }

        let mut successful = 0;
        let mut failed = 0;
        let mut skipped = 0;

        for article in &articles {
            tracing::debug!(article_id = %article.id, title = %article.title, "Sending article");

            for target in &targets {
                let Some(token) = target.deliverable_token() else {
                    skipped += 1;
                    continue;
                };

                let message = PushMessage::for_article(article, token, self.body_chars);
                let outcome = DeliveryOutcome {
                    article_id: article.id.clone(),
                    token: token.to_string(),
                    result: self.sender.send(&message).await.map_err(|e| e.to_string()),
                };

                match &outcome.result {
                    Ok(message_id) => {
                        successful += 1;
                        metrics::counter!("push_sent_total").increment(1);
                        tracing::debug!(
                            platform = target.platform_label(),
                            token = %mask_token(&outcome.token),
                            message_id = %message_id,
                            "Push delivered"
                        );
                    }
                    Err(e) => {
                        failed += 1;
                        metrics::counter!("push_failed_total").increment(1);
                        tracing::warn!(
                            article_id = %outcome.article_id,
                            platform = target.platform_label(),
                            token = %mask_token(&outcome.token),
                            error = %e,
                            "Push failed"
                        );
                    }
                }
            }
        }

        let ids: Vec<String> = articles.iter().map(|a| a.id.clone()).collect();
        let marked_notified = self.articles.mark_notified(&ids).await?;

        let summary = DispatchSummary {
            articles: articles.len(),
            successful,
            failed,
            skipped,
            marked_notified,
        };
        tracing::info!(
            articles = summary.articles,
            successful,
            failed,
            skipped,
            "Notification dispatch finished"
        );

        Ok(DispatchReport::Sent(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NewsArticle, NotificationTarget};
    use crate::domain::repositories::{MockArticleRepository, MockTokenRepository};
    use crate::infrastructure::messaging::{MockPushSender, PushError};
    use chrono::Utc;
    use serde_json::json;

    fn article(id: &str) -> NewsArticle {
        NewsArticle::new(
            id.to_string(),
            format!("Title {id}"),
            Some("Summary".to_string()),
            Utc::now(),
        )
    }

    fn service(
        articles: MockArticleRepository,
        tokens: MockTokenRepository,
        sender: MockPushSender,
    ) -> NotificationService {
        NotificationService::new(Arc::new(articles), Arc::new(tokens), Arc::new(sender), 5, 100)
    }

    #[tokio::test]
    async fn test_no_articles() {
        let mut articles = MockArticleRepository::new();
        articles
            .expect_fetch_unnotified()
            .withf(|limit| *limit == 5)
            .returning(|_| Ok(vec![]));
        articles.expect_mark_notified().times(0);

        let mut tokens = MockTokenRepository::new();
        tokens.expect_list_targets().times(0);

        let report = service(articles, tokens, MockPushSender::new())
            .dispatch()
            .await
            .unwrap();

        assert_eq!(report, DispatchReport::NoArticles);
        assert_eq!(report.message(), "No new articles");
    }

    #[tokio::test]
    async fn test_no_tokens_leaves_articles_pending() {
        let mut articles = MockArticleRepository::new();
        articles
            .expect_fetch_unnotified()
            .returning(|_| Ok(vec![article("a1")]));
        articles.expect_mark_notified().times(0);

        let mut tokens = MockTokenRepository::new();
        tokens.expect_list_targets().returning(|| Ok(vec![]));

        let report = service(articles, tokens, MockPushSender::new())
            .dispatch()
            .await
            .unwrap();

        assert_eq!(report, DispatchReport::NoTokens { articles: 1 });
        assert_eq!(report.message(), "No user tokens found");
    }

    #[tokio::test]
    async fn test_one_failing_token_does_not_stop_the_batch() {
        let mut articles = MockArticleRepository::new();
        articles
            .expect_fetch_unnotified()
            .returning(|_| Ok(vec![article("a1"), article("a2")]));
        articles
            .expect_mark_notified()
            .withf(|ids| ids == ["a1".to_string(), "a2".to_string()])
            .times(1)
            .returning(|ids| Ok(ids.len() as u64));

        let mut tokens = MockTokenRepository::new();
        tokens.expect_list_targets().returning(|| {
            Ok(vec![
                NotificationTarget::new("t1", "android"),
                NotificationTarget::new("t2", "ios"),
                NotificationTarget::new("t3", "android"),
            ])
        });

        let mut sender = MockPushSender::new();
        sender.expect_send().times(6).returning(|message| {
            if message.token == "t2" {
                Err(PushError::Rejected {
                    status: 404,
                    message: "UNREGISTERED".to_string(),
                })
            } else {
                Ok(format!("projects/p/messages/{}", message.token))
            }
        });

        let report = service(articles, tokens, sender).dispatch().await.unwrap();

        let DispatchReport::Sent(summary) = report else {
            panic!("expected messages to be sent");
        };
        assert_eq!(summary.articles, 2);
        assert_eq!(summary.successful, 4);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.successful + summary.failed, 2 * 3);
        assert_eq!(summary.marked_notified, 2);
        assert_eq!(
            summary.message(),
            "Notifications sent for 2 articles - 4 successful, 2 failed"
        );
    }

    #[tokio::test]
    async fn test_all_sends_failing_still_marks_notified() {
        let mut articles = MockArticleRepository::new();
        articles
            .expect_fetch_unnotified()
            .returning(|_| Ok(vec![article("a1")]));
        articles
            .expect_mark_notified()
            .times(1)
            .returning(|_| Ok(1));

        let mut tokens = MockTokenRepository::new();
        tokens
            .expect_list_targets()
            .returning(|| Ok(vec![NotificationTarget::new("t1", "ios")]));

        let mut sender = MockPushSender::new();
        sender
            .expect_send()
            .returning(|_| Err(PushError::Transport("connection reset".to_string())));

        let report = service(articles, tokens, sender).dispatch().await.unwrap();

        let DispatchReport::Sent(summary) = report else {
            panic!("expected messages to be sent");
        };
        assert_eq!(summary.successful, 0);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.marked_notified, 1);
    }

    #[tokio::test]
    async fn test_blank_tokens_are_skipped_not_counted() {
        let mut articles = MockArticleRepository::new();
        articles
            .expect_fetch_unnotified()
            .returning(|_| Ok(vec![article("a1")]));
        articles.expect_mark_notified().returning(|_| Ok(1));

        let mut tokens = MockTokenRepository::new();
        tokens.expect_list_targets().returning(|| {
            Ok(vec![
                NotificationTarget::new("t1", "ios"),
                NotificationTarget {
                    token: None,
                    platform: Some("android".to_string()),
                },
                NotificationTarget::new("", "android"),
            ])
        });

        let mut sender = MockPushSender::new();
        sender
            .expect_send()
            .times(1)
            .returning(|_| Ok("projects/p/messages/1".to_string()));

        let report = service(articles, tokens, sender).dispatch().await.unwrap();

        let DispatchReport::Sent(summary) = report else {
            panic!("expected messages to be sent");
        };
        assert_eq!(summary.successful, 1);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.skipped, 2);
    }

    #[tokio::test]
    async fn test_token_lookup_failure_is_an_error() {
        let mut articles = MockArticleRepository::new();
        articles
            .expect_fetch_unnotified()
            .returning(|_| Ok(vec![article("a1")]));
        articles.expect_mark_notified().times(0);

        let mut tokens = MockTokenRepository::new();
        tokens
            .expect_list_targets()
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let result = service(articles, tokens, MockPushSender::new())
            .dispatch()
            .await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
