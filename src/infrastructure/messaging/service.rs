//! Push sender trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::PushMessage;

/// Errors that can occur while delivering a push message.
#[derive(Debug, Error)]
pub enum PushError {
    /// The service-account credential is missing or unusable.
    #[error("invalid push credentials: {0}")]
    Credentials(String),

    /// An OAuth access token could not be obtained.
    #[error("push authentication failed: {0}")]
    Auth(String),

    /// The request never produced a response.
    #[error("push request failed: {0}")]
    Transport(String),

    /// The messaging API refused the message (bad token, quota, ...).
    #[error("push rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// Result type for push delivery.
pub type PushResult<T> = Result<T, PushError>;

/// Push delivery capability.
///
/// # Implementations
///
/// - [`crate::infrastructure::messaging::FcmSender`] - Firebase Cloud Messaging HTTP v1
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushSender: Send + Sync {
    /// Sends one message and returns the provider's message identifier.
    ///
    /// # Errors
    ///
    /// See [`PushError`].
    async fn send(&self, message: &PushMessage) -> PushResult<String>;
}
