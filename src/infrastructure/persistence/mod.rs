//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries against the schema in `migrations/`.
//!
//! # Repositories
//!
//! - [`PgArticleRepository`] - Article lookups, notify flags, retention deletes
//! - [`PgTokenRepository`] - Device tokens
//! - [`PgTranslationRepository`] - Video translation upserts

pub mod pg_article_repository;
pub mod pg_token_repository;
pub mod pg_translation_repository;

pub use pg_article_repository::PgArticleRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_translation_repository::PgTranslationRepository;
