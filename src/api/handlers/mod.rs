//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod health;
pub mod news_translation;
pub mod notifications;
pub mod retention;
pub mod translate;
pub mod video_translation;

pub use health::health_handler;
pub use news_translation::auto_translate_news_handler;
pub use notifications::send_notifications_handler;
pub use retention::delete_old_news_handler;
pub use translate::translate_handler;
pub use video_translation::auto_translate_video_handler;
