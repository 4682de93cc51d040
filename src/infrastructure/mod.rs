//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`messaging`] - Firebase Cloud Messaging sender
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`translate`] - Google Translate client

pub mod messaging;
pub mod persistence;
pub mod translate;
