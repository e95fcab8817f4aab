//! Subscription and billing records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::MutationStatus;

/// A purchasable subscription plan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    /// Backend identifier.
    pub id: String,
    /// Plan name.
    pub name: String,
    /// Marketing description.
    #[serde(default)]
    pub description: Option<String>,
    /// Price per period.
    #[serde(default)]
    pub price: Option<f64>,
    /// ISO currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Billing period (month, year).
    #[serde(default)]
    pub period: Option<String>,
    /// Free trial length in days.
    #[serde(default)]
    pub trial_period_days: Option<i32>,
    /// Whether the plan can currently be purchased.
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Team size limit.
    #[serde(default)]
    pub max_team_members: Option<i32>,
    /// Client count limit.
    #[serde(default)]
    pub max_clients: Option<i32>,
    /// Job count limit.
    #[serde(default)]
    pub max_jobs: Option<i32>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The current account's subscription.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Backend identifier.
    pub id: String,
    /// The subscribed plan.
    #[serde(default)]
    pub plan: Option<SubscriptionPlan>,
    /// Billing status (active, trialing, canceled, ...).
    #[serde(default)]
    pub status: Option<String>,
    /// Start of the current billing period.
    #[serde(default)]
    pub current_period_start: Option<DateTime<Utc>>,
    /// End of the current billing period.
    #[serde(default)]
    pub current_period_end: Option<DateTime<Utc>>,
    /// Whether the subscription ends at period end.
    #[serde(default)]
    pub cancel_at_period_end: Option<bool>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A hosted checkout session for starting a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    /// URL the caller should open to complete payment.
    #[serde(default)]
    pub checkout_url: Option<String>,
    /// Payment-provider session identifier.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// How mid-period plan changes are billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProrationBehavior {
    /// Invoice the difference immediately.
    AlwaysInvoice,
    /// Create proration line items on the next invoice.
    CreateProrations,
    /// Do not prorate.
    None,
}

impl ProrationBehavior {
    /// The wire value the backend expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlwaysInvoice => "always_invoice",
            Self::CreateProrations => "create_prorations",
            Self::None => "none",
        }
    }
}

/// Billing preview for a prospective plan change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionChangePreview {
    /// Total charged on the next invoice.
    #[serde(default)]
    pub total: Option<f64>,
    /// Next billing date.
    #[serde(default)]
    pub next_billing_date: Option<DateTime<Utc>>,
    /// Date the proration is computed against.
    #[serde(default)]
    pub proration_date: Option<DateTime<Utc>>,
    /// Prorated amount.
    #[serde(default)]
    pub proration_amount: Option<f64>,
    /// End of the current billing period.
    #[serde(default)]
    pub current_period_end: Option<DateTime<Utc>>,
}

/// Payload returned by the preview mutation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionChangePreviewPayload {
    /// The billing preview.
    #[serde(default)]
    pub preview: Option<SubscriptionChangePreview>,
    /// Mutation outcome.
    #[serde(flatten)]
    pub status: MutationStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn proration_behavior_wire_values() {
        assert_eq!(ProrationBehavior::AlwaysInvoice.as_str(), "always_invoice");
        assert_eq!(ProrationBehavior::CreateProrations.as_str(), "create_prorations");
        assert_eq!(ProrationBehavior::None.as_str(), "none");
    }
}
