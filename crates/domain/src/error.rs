//! Domain error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field-attributed validation failure extracted from a backend error
/// message.
///
/// Produced by the response classifier; consumed by the caller-supplied
/// validation handler. Validation failures are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("validation failed for field '{field}': {message}")]
pub struct ValidationError {
    /// The input field the backend rejected.
    pub field: String,
    /// The backend's message, trimmed.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error, trimming the message.
    #[must_use]
    pub fn new(field: impl Into<String>, message: &str) -> Self {
        Self {
            field: field.into(),
            message: message.trim().to_string(),
        }
    }
}
