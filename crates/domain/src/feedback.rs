//! In-app feedback records.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::common::MutationStatus;

/// A feedback entry submitted by a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Backend identifier.
    pub id: String,
    /// Submitting user (display form).
    #[serde(default)]
    pub user: Option<String>,
    /// Page the feedback was submitted from.
    #[serde(default)]
    pub page_url: Option<String>,
    /// Feedback text.
    pub description: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload returned by the feedback mutation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPayload {
    /// The stored feedback entry.
    #[serde(default)]
    pub feedback: Option<Feedback>,
    /// Mutation outcome.
    #[serde(flatten)]
    pub status: MutationStatus,
}
