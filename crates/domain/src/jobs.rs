//! Job records, filters, and inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::Client;
use crate::common::MutationStatus;
use crate::estimates::Estimate;
use crate::invoices::Invoice;

/// A job (unit of field work) with its client and attached documents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Backend identifier.
    pub id: String,
    /// Short title.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Workflow status.
    #[serde(default)]
    pub status: Option<String>,
    /// Scheduled start.
    #[serde(default)]
    pub scheduled_date: Option<String>,
    /// Completion deadline.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// The client the job is for.
    #[serde(default)]
    pub client: Option<Client>,
    /// Estimates attached to the job.
    #[serde(default)]
    pub estimates: Vec<Estimate>,
    /// Invoices attached to the job.
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

/// A minimal job reference as embedded in estimates and invoices.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRef {
    /// Backend identifier.
    pub id: String,
    /// Short title.
    #[serde(default)]
    pub title: Option<String>,
}

/// Optional filters for listing jobs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    /// Restrict to a workflow status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Restrict to jobs for one client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Restrict to jobs assigned to one team member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<String>,
}

/// Input for creating or updating a job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInput {
    /// Short title.
    pub title: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Workflow status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Scheduled start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    /// Completion deadline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// The client the job is for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// The team member the job is assigned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<String>,
}

/// Payload returned by job mutations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    /// The created or updated job.
    #[serde(default)]
    pub job: Option<Job>,
    /// Mutation outcome.
    #[serde(flatten)]
    pub status: MutationStatus,
}
