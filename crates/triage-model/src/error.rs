use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// A required field is missing or has the wrong type. This fails the
    /// single record it occurs in, never the whole batch.
    #[error("field `{field}` {reason}")]
    Field { field: &'static str, reason: String },
    #[error("{0}")]
    Message(String),
}

impl TriageError {
    pub fn field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Field {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TriageError>;

/// A record rejected during batch processing, with its input position.
#[derive(Debug)]
pub struct Rejection {
    /// Zero-based index of the record in the input sequence.
    pub index: usize,
    pub error: TriageError,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {}: {}", self.index, self.error)
    }
}
