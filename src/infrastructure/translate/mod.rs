//! Outbound text translation.
//!
//! Provides a [`Translator`] trait and the HTTP implementation
//! [`GoogleTranslator`]. Fallback to the original text is decided by the
//! caller, see [`crate::application::services::TranslationService`].

mod google;
mod service;

pub use google::{DEFAULT_ENDPOINT, GoogleTranslator, parse_segments};
pub use service::{TranslateError, TranslateResult, Translator};

#[cfg(test)]
pub use service::MockTranslator;
