//! Subscription and billing operations.

use fieldlink_domain::{GraphqlRequest, ProrationBehavior};
use serde_json::json;

const PLAN_FIELDS: &str = "id name description price currency period trialPeriodDays \
                           isActive maxTeamMembers maxClients maxJobs createdAt updatedAt";

/// `GetSubscriptionPlans` request.
#[must_use]
pub fn get_subscription_plans() -> GraphqlRequest {
    GraphqlRequest::new(
        "GetSubscriptionPlans",
        format!("query GetSubscriptionPlans {{ subscriptionPlans {{ {PLAN_FIELDS} }} }}"),
    )
}

/// `GetMySubscription` request.
#[must_use]
pub fn get_my_subscription() -> GraphqlRequest {
    GraphqlRequest::new(
        "GetMySubscription",
        format!(
            "query GetMySubscription {{ mySubscription \
             {{ id status currentPeriodStart currentPeriodEnd cancelAtPeriodEnd \
             createdAt updatedAt plan {{ {PLAN_FIELDS} }} }} }}"
        ),
    )
}

/// `CreateCheckoutSession` request.
#[must_use]
pub fn create_checkout_session(plan_id: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "CreateCheckoutSession",
        "mutation CreateCheckoutSession($planId: ID!) \
         { createCheckoutSession(planId: $planId) \
         { checkoutUrl sessionId success message } }",
    )
    .with_variables(json!({ "planId": plan_id }))
}

/// `CancelSubscription` request.
#[must_use]
pub fn cancel_subscription() -> GraphqlRequest {
    GraphqlRequest::new(
        "CancelSubscription",
        "mutation CancelSubscription { cancelSubscription { success message } }",
    )
}

/// `UpdateSubscription` request: switches the account to a new plan.
#[must_use]
pub fn update_subscription(
    plan_id: &str,
    proration_behavior: Option<ProrationBehavior>,
) -> GraphqlRequest {
    let mut variables = json!({ "planId": plan_id });
    if let Some(behavior) = proration_behavior {
        variables["prorationBehavior"] = json!(behavior.as_str());
    }
    GraphqlRequest::new(
        "UpdateSubscription",
        "mutation UpdateSubscription($planId: ID!, $prorationBehavior: String) \
         { updateSubscription(planId: $planId, prorationBehavior: $prorationBehavior) \
         { success message } }",
    )
    .with_variables(variables)
}

/// `PreviewSubscriptionChange` request: bills nothing, reports what would be
/// charged.
#[must_use]
pub fn preview_subscription_change(plan_id: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "PreviewSubscriptionChange",
        "mutation PreviewSubscriptionChange($planId: ID!) \
         { previewSubscriptionChange(planId: $planId) \
         { preview { total nextBillingDate prorationDate prorationAmount \
         currentPeriodEnd } success message } }",
    )
    .with_variables(json!({ "planId": plan_id }))
}
