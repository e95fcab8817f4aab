//! Estimate records, line items, and inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::MutationStatus;
use crate::jobs::JobRef;

/// A single line item on an estimate or invoice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Backend identifier.
    pub id: String,
    /// Short title.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Item kind (labor, material, ...).
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    /// Tax treatment.
    #[serde(default)]
    pub tax_type: Option<String>,
}

/// Input for a line item on an estimate or invoice.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    /// Short title.
    pub title: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Item kind.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    /// Tax treatment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_type: Option<String>,
}

/// An estimate attached to a job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    /// Backend identifier.
    pub id: String,
    /// Estimate date.
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

/// Input for creating or updating an estimate.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateInput {
    /// Parent job identifier.
    pub job_id: String,
    /// Estimate date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Workflow status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Whether taxes apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_taxes: Option<bool>,
    /// Line items.
    #[serde(default)]
    pub line_items: Vec<LineItemInput>,
}

/// Payload returned by estimate mutations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatePayload {
    /// The created or updated estimate.
    #[serde(default)]
    pub estimate: Option<Estimate>,
    /// Mutation outcome.
    #[serde(flatten)]
    pub status: MutationStatus,
}
