#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use news_pipeline::api::routes::client_routes;
use news_pipeline::application::services::{
    NotificationService, RetentionService, RetentionStrategy, TranslationService,
    VideoTranslationService,
};
use news_pipeline::domain::entities::{
    LanguageCode, LanguageSet, NewsArticle, NotificationTarget, PushMessage, VideoTranslation,
};
use news_pipeline::domain::repositories::{
    ArticleRepository, TokenRepository, TranslationRepository,
};
use news_pipeline::error::AppError;
use news_pipeline::infrastructure::messaging::{PushError, PushResult, PushSender};
use news_pipeline::infrastructure::translate::{TranslateError, TranslateResult, Translator};
use news_pipeline::routes::service_router;
use news_pipeline::state::AppState;

/// How the fake translator answers for one target language.
#[derive(Debug, Clone)]
pub enum Reply {
    /// `"{text} [{lang}]"`
    Tagged,
    /// The given text, regardless of input.
    Fixed(String),
    Status(u16),
    Unreachable,
}

/// Translator that answers from a per-language table and records calls.
#[derive(Default)]
pub struct FakeTranslator {
    replies: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeTranslator {
    pub fn reply(&self, language: &str, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .insert(language.to_string(), reply);
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, text: &str, target: &LanguageCode) -> TranslateResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), target.to_string()));

        let reply = self
            .replies
            .lock()
            .unwrap()
            .get(target.as_str())
            .cloned()
            .unwrap_or(Reply::Tagged);

        match reply {
            Reply::Tagged => Ok(format!("{text} [{target}]")),
            Reply::Fixed(value) => Ok(value),
            Reply::Status(code) => Err(TranslateError::Status(code)),
            Reply::Unreachable => Err(TranslateError::Transport("connection refused".into())),
        }
    }
}

/// Article table kept in memory.
#[derive(Default)]
pub struct FakeArticleRepository {
    pub articles: Mutex<Vec<NewsArticle>>,
    pub unhealthy: Mutex<bool>,
    pub procedure_calls: Mutex<Vec<DateTime<Utc>>>,
}

impl FakeArticleRepository {
    pub fn insert(&self, article: NewsArticle) {
        self.articles.lock().unwrap().push(article);
    }

    pub fn ids(&self) -> Vec<String> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .map(|a| a.id.clone())
            .collect()
    }

    pub fn notified(&self, id: &str) -> bool {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.id == id && a.notified)
    }
}

#[async_trait]
impl ArticleRepository for FakeArticleRepository {
    async fn fetch_unnotified(&self, limit: i64) -> Result<Vec<NewsArticle>, AppError> {
        let mut pending: Vec<NewsArticle> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| !a.notified)
            .cloned()
            .collect();
        pending.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        pending.truncate(limit as usize);
        Ok(pending)
    }

    async fn mark_notified(&self, ids: &[String]) -> Result<u64, AppError> {
        let mut updated = 0;
        for article in self.articles.lock().unwrap().iter_mut() {
            if ids.contains(&article.id) {
                article.notified = true;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn delete_published_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<NewsArticle>, AppError> {
        let mut articles = self.articles.lock().unwrap();
        let (old, kept): (Vec<_>, Vec<_>) = articles
            .drain(..)
            .partition(|a| a.is_published_before(cutoff));
        *articles = kept;
        Ok(old)
    }

    async fn purge_via_procedure(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        self.procedure_calls.lock().unwrap().push(cutoff);
        let deleted = self.delete_published_before(cutoff).await?;
        Ok(deleted.len() as u64)
    }

    async fn health_check(&self) -> bool {
        !*self.unhealthy.lock().unwrap()
    }
}

/// Fixed device list.
#[derive(Default)]
pub struct FakeTokenRepository {
    pub targets: Mutex<Vec<NotificationTarget>>,
}

impl FakeTokenRepository {
    pub fn register(&self, token: &str, platform: &str) {
        self.targets
            .lock()
            .unwrap()
            .push(NotificationTarget::new(token, platform));
    }
}

#[async_trait]
impl TokenRepository for FakeTokenRepository {
    async fn list_targets(&self) -> Result<Vec<NotificationTarget>, AppError> {
        Ok(self.targets.lock().unwrap().clone())
    }
}

/// Video translation table keyed like the real primary key.
#[derive(Default)]
pub struct FakeTranslationRepository {
    pub rows: Mutex<BTreeMap<(String, String), VideoTranslation>>,
    /// Languages whose translated upsert fails once.
    pub fail_once: Mutex<HashSet<String>>,
    pub fail_count: Mutex<bool>,
}

impl FakeTranslationRepository {
    pub fn row(&self, video_id: &str, language: &str) -> Option<VideoTranslation> {
        self.rows
            .lock()
            .unwrap()
            .get(&(video_id.to_string(), language.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl TranslationRepository for FakeTranslationRepository {
    async fn upsert(&self, translation: &VideoTranslation) -> Result<(), AppError> {
        let language = translation.language_code.to_string();
        if self.fail_once.lock().unwrap().remove(&language) {
            return Err(AppError::internal(
                "Database error",
                json!({ "reason": "simulated write failure" }),
            ));
        }

        self.rows.lock().unwrap().insert(
            (translation.video_article_id.clone(), language),
            translation.clone(),
        );
        Ok(())
    }

    async fn count_for_video(&self, video_article_id: &str) -> Result<i64, AppError> {
        if *self.fail_count.lock().unwrap() {
            return Err(AppError::internal("Database error", json!({})));
        }

        let count = self
            .rows
            .lock()
            .unwrap()
            .keys()
            .filter(|(id, _)| id == video_article_id)
            .count();
        Ok(count as i64)
    }
}

/// Push sender that rejects a configured set of tokens and records the rest.
#[derive(Default)]
pub struct FakePushSender {
    pub rejected_tokens: Mutex<HashSet<String>>,
    pub sent: Mutex<Vec<PushMessage>>,
}

impl FakePushSender {
    pub fn reject(&self, token: &str) {
        self.rejected_tokens
            .lock()
            .unwrap()
            .insert(token.to_string());
    }

    pub fn sent(&self) -> Vec<PushMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushSender for FakePushSender {
    async fn send(&self, message: &PushMessage) -> PushResult<String> {
        if self.rejected_tokens.lock().unwrap().contains(&message.token) {
            return Err(PushError::Rejected {
                status: 404,
                message: "UNREGISTERED".to_string(),
            });
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        Ok(format!("projects/test/messages/{}", sent.len()))
    }
}

/// Every fake plus the state wired around them.
pub struct TestContext {
    pub translator: Arc<FakeTranslator>,
    pub articles: Arc<FakeArticleRepository>,
    pub tokens: Arc<FakeTokenRepository>,
    pub translations: Arc<FakeTranslationRepository>,
    pub sender: Arc<FakePushSender>,
    pub fanout: LanguageSet,
    pub strategy: RetentionStrategy,
}

impl Default for TestContext {
    fn default() -> Self {
        Self {
            translator: Arc::default(),
            articles: Arc::default(),
            tokens: Arc::default(),
            translations: Arc::default(),
            sender: Arc::default(),
            fanout: LanguageSet::default_fanout(),
            strategy: RetentionStrategy::Filter,
        }
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fanout(mut self, languages: &str) -> Self {
        self.fanout = LanguageSet::from_csv(languages).unwrap();
        self
    }

    pub fn with_strategy(mut self, strategy: RetentionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builds the state with no pause between languages.
    pub fn state(&self) -> AppState {
        let translation_service = Arc::new(TranslationService::new(
            self.translator.clone(),
            self.fanout.clone(),
            LanguageSet::default_supported(),
            Duration::ZERO,
        ));

        let video_translation_service = Arc::new(VideoTranslationService::new(
            translation_service.clone(),
            self.translations.clone(),
        ));

        let notification_service = Arc::new(NotificationService::new(
            self.articles.clone(),
            self.tokens.clone(),
            self.sender.clone(),
            5,
            100,
        ));

        let retention_service = Arc::new(RetentionService::new(
            self.articles.clone(),
            chrono::Duration::days(7),
            self.strategy,
        ));

        AppState::new(
            translation_service,
            video_translation_service,
            notification_service,
            retention_service,
            self.articles.clone(),
        )
    }

    /// Full router with CORS and tracing, minus the per-IP limiter.
    pub fn server(&self) -> TestServer {
        let app = service_router(client_routes(), self.state());
        TestServer::new(app).unwrap()
    }
}

pub fn article(id: &str, summary: Option<&str>, published_at: DateTime<Utc>) -> NewsArticle {
    NewsArticle::new(
        id.to_string(),
        format!("Title {id}"),
        summary.map(str::to_string),
        published_at,
    )
}
