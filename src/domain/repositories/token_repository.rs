//! Repository trait for device tokens.

use crate::domain::entities::NotificationTarget;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to `users_tokens`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Lists every registered device, including rows with a blank token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_targets(&self) -> Result<Vec<NotificationTarget>, AppError>;
}
