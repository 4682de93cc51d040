//! Identifier that may arrive as a JSON string or number.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidationError;

/// Record identifier as sent by the caller.
///
/// Serializes back in the form it was received, so responses echo the
/// caller's value unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Rejects an empty or whitespace-only string id.
pub fn validate_record_id(id: &RecordId) -> Result<(), ValidationError> {
    if id.is_blank() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
