//! Invoice records and inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::MutationStatus;
use crate::estimates::{LineItem, LineItemInput};
use crate::jobs::JobRef;

/// An invoice attached to a job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Backend identifier.
    pub id: String,
    /// Invoice date.
    #[serde(default)]
    pub date: Option<String>,
    /// Workflow status.
    #[serde(default)]
    pub status: Option<String>,
    /// Total amount.
    #[serde(default)]
    pub total: Option<f64>,
    /// Whether taxes apply.
    #[serde(default)]
    pub apply_taxes: Option<bool>,
    /// Payment due date.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Parent job reference.
    #[serde(default)]
    pub job: Option<JobRef>,
    /// Line items.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// Input for creating or updating an invoice.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceInput {
    /// Parent job identifier.
    pub job_id: String,
    /// Invoice date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Workflow status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Whether taxes apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_taxes: Option<bool>,
    /// Payment due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Line items.
    #[serde(default)]
    pub line_items: Vec<LineItemInput>,
}

/// Payload returned by invoice mutations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    /// The created or updated invoice.
    #[serde(default)]
    pub invoice: Option<Invoice>,
    /// Mutation outcome.
    #[serde(flatten)]
    pub status: MutationStatus,
}
