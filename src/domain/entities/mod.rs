//! Core domain entities.
//!
//! Plain data structures shared by the translation, notification and
//! retention pipelines. All of them live for a single request.
//!
//! # Entity Types
//!
//! - [`LanguageCode`] / [`LanguageSet`] - Validated target languages
//! - [`TranslatableRecord`] / [`TranslationResult`] - Fan-out input and output
//! - [`NewsArticle`] - A stored article
//! - [`VideoTranslation`] - Per-language row for a video article
//! - [`NotificationTarget`] / [`PushMessage`] / [`DeliveryOutcome`] - Push delivery

pub mod article;
pub mod language;
pub mod notification;
pub mod record;
pub mod video;

pub use article::NewsArticle;
pub use language::{LanguageCode, LanguageSet};
pub use notification::{DeliveryOutcome, NotificationTarget, PushMessage};
pub use record::{FieldTranslation, TranslatableRecord, TranslationResult, is_translatable};
pub use video::VideoTranslation;
