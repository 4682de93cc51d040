//! Application layer services implementing business logic.
//!
//! Services consume repository and client traits and expose the operations
//! the HTTP handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::translation_service::TranslationService`] - Single-text and fan-out translation
//! - [`services::video_translation_service::VideoTranslationService`] - Video fan-out with upsert persistence
//! - [`services::notification_service::NotificationService`] - Push notifications for new articles
//! - [`services::retention_service::RetentionService`] - Deletion of articles past the retention window

pub mod services;
