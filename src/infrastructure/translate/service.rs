//! Translator trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::LanguageCode;

/// Errors that can occur while calling the translation endpoint.
///
/// Callers never propagate these: every variant degrades to the original
/// text. The variants only decide how the degrade is reported.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The request never produced a response (DNS, TLS, timeout, reset).
    #[error("translation request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("translation endpoint returned status {0}")]
    Status(u16),

    /// The endpoint answered 2xx but the body had no usable segments.
    #[error("malformed translation payload: {0}")]
    Malformed(String),
}

impl TranslateError {
    /// True if the endpoint could not be reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Result type for translation calls.
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Text translation capability.
///
/// The source language is always auto-detected by the endpoint.
///
/// # Implementations
///
/// - [`crate::infrastructure::translate::GoogleTranslator`] - public `translate_a/single` endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` into `target`.
    ///
    /// # Errors
    ///
    /// See [`TranslateError`].
    async fn translate(&self, text: &str, target: &LanguageCode) -> TranslateResult<String>;
}
