//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access so the application services can be
//! exercised without a database. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`ArticleRepository`] - Unnotified lookups, bulk notify, retention deletes
//! - [`TokenRepository`] - Device tokens for push delivery
//! - [`TranslationRepository`] - Video translation upserts and read-back

pub mod article_repository;
pub mod token_repository;
pub mod translation_repository;

pub use article_repository::ArticleRepository;
pub use token_repository::TokenRepository;
pub use translation_repository::TranslationRepository;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use translation_repository::MockTranslationRepository;
