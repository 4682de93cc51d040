//! Business logic services for the application layer.

pub mod notification_service;
pub mod retention_service;
pub mod translation_service;
pub mod video_translation_service;

pub use notification_service::{DispatchReport, DispatchSummary, NotificationService};
pub use retention_service::{
    DEFAULT_RETENTION_DAYS, RetentionService, RetentionStrategy, SweepReport,
};
pub use translation_service::{SingleTranslation, TextTranslation, TranslationService};
pub use video_translation_service::{
    LanguageOutcome, VideoTranslationReport, VideoTranslationService,
};
