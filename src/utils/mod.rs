//! Small helpers shared across layers.
//!
//! - [`text`] - Character-safe truncation and token masking

pub mod text;
