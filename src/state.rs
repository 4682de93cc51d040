//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    NotificationService, RetentionService, TranslationService, VideoTranslationService,
};
use crate::domain::repositories::ArticleRepository;

/// Services shared across requests.
///
/// Cloned per request; every field is an `Arc`, so a clone is a handful of
/// reference-count increments.
#[derive(Clone)]
pub struct AppState {
    pub translation_service: Arc<TranslationService>,
    pub video_translation_service: Arc<VideoTranslationService>,
    pub notification_service: Arc<NotificationService>,
    pub retention_service: Arc<RetentionService>,
    /// Used by the health check to probe storage.
    pub article_repository: Arc<dyn ArticleRepository>,
}

impl AppState {
    pub fn new(
        translation_service: Arc<TranslationService>,
        video_translation_service: Arc<VideoTranslationService>,
        notification_service: Arc<NotificationService>,
        retention_service: Arc<RetentionService>,
        article_repository: Arc<dyn ArticleRepository>,
    ) -> Self {
        Self {
            translation_service,
            video_translation_service,
            notification_service,
            retention_service,
            article_repository,
        }
    }
}
