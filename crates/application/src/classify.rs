//! Response classification.
//!
//! The backend signals auth and validation failures only through error
//! message wording, so classification is a string-matching compatibility
//! shim. It is isolated here so it can be swapped for structured error
//! codes without touching the pipeline.

use std::sync::LazyLock;

use fieldlink_domain::{GraphqlError, ValidationError};
use regex::Regex;
use tracing::debug;

use crate::ports::TransportError;

/// Case-sensitive substrings that flag an authorization failure.
///
/// A case-insensitive match on `"token"` is applied in addition to these.
pub const AUTH_SIGNALS: [&str; 4] = [
    "Authentication",
    "Error decoding signature",
    "JWT",
    "Signature has expired",
];

static FIELD_NAME: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // literal pattern
    Regex::new(r"Field '([^']+)'").unwrap()
});

/// Outcome of classifying one response or transport failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Whether any message matched an auth-failure signal.
    pub auth_failure: bool,
    /// Field-attributed validation errors extracted from the messages.
    pub validation_errors: Vec<ValidationError>,
}

impl Classification {
    fn absorb_message(&mut self, message: &str) {
        if is_auth_failure(message) {
            debug!(message, "auth failure signal matched");
            self.auth_failure = true;
        }
        if let Some(validation) = extract_validation(message) {
            self.validation_errors.push(validation);
        }
    }
}

fn is_auth_failure(message: &str) -> bool {
    AUTH_SIGNALS.iter().any(|signal| message.contains(signal))
        || message.to_lowercase().contains("token")
}

/// Extracts a validation error from a single message, if it matches the
/// backend's validation wording and names a field.
fn extract_validation(message: &str) -> Option<ValidationError> {
    let is_validation = message.contains("got invalid value")
        || (message.contains("Field") && message.contains("was not provided"));
    if !is_validation {
        return None;
    }
    let captures = FIELD_NAME.captures(message)?;
    let field = captures.get(1)?.as_str();
    Some(ValidationError::new(field, message))
}

/// Classifies the domain errors of a GraphQL response.
#[must_use]
pub fn classify_errors(errors: &[GraphqlError]) -> Classification {
    let mut classification = Classification::default();
    for error in errors {
        classification.absorb_message(&error.message);
    }
    classification
}

/// Classifies a transport failure.
///
/// Auth signals are matched against the failure text. Server-side error
/// bodies (non-success HTTP statuses) may embed a structured `errors`
/// array; it is scanned with the same validation patterns.
#[must_use]
pub fn classify_transport_failure(error: &TransportError) -> Classification {
    let mut classification = Classification::default();
    classification.absorb_message(&error.signal_text());

    if let TransportError::HttpStatus { body, .. } = error {
        for error in embedded_errors(body) {
            classification.absorb_message(&error.message);
        }
    }
    classification
}

/// Parses the `errors` array out of a server error body, when present.
fn embedded_errors(body: &str) -> Vec<GraphqlError> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        errors: Vec<GraphqlError>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.errors)
        .unwrap_or_default()
}
