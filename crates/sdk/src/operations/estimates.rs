//! Estimate operations.

use fieldlink_domain::{EstimateInput, GraphqlRequest};
use serde_json::json;

const ESTIMATE_FIELDS: &str = "id date status total applyTaxes createdAt updatedAt \
                               job { id title } \
                               lineItems { id title description price type taxType }";

/// `GetEstimatesForJob` request.
#[must_use]
pub fn get_estimates_for_job(job_id: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "GetEstimatesForJob",
        format!(
            "query GetEstimatesForJob($jobId: ID!) \
             {{ estimates(jobId: $jobId) {{ {ESTIMATE_FIELDS} }} }}"
        ),
    )
    .with_variables(json!({ "jobId": job_id }))
}

/// `GetEstimate` request.
#[must_use]
pub fn get_estimate(id: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "GetEstimate",
        format!("query GetEstimate($id: ID!) {{ estimate(id: $id) {{ {ESTIMATE_FIELDS} }} }}"),
    )
    .with_variables(json!({ "id": id }))
}

/// `CreateEstimate` request.
#[must_use]
pub fn create_estimate(input: &EstimateInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "CreateEstimate",
        format!(
            "mutation CreateEstimate($input: EstimateInput!) \
             {{ createEstimate(input: $input) \
             {{ estimate {{ {ESTIMATE_FIELDS} }} success message }} }}"
        ),
    )
    .with_variables(json!({ "input": input }))
}

/// `UpdateEstimate` request.
#[must_use]
pub fn update_estimate(id: &str, input: &EstimateInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "UpdateEstimate",
        format!(
            "mutation UpdateEstimate($id: ID!, $input: EstimateInput!) \
             {{ updateEstimate(id: $id, input: $input) \
             {{ estimate {{ {ESTIMATE_FIELDS} }} success message }} }}"
        ),
    )
    .with_variables(json!({ "id": id, "input": input }))
}

/// `DeleteEstimate` request.
#[must_use]
pub fn delete_estimate(id: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "DeleteEstimate",
        "mutation DeleteEstimate($id: ID!) { deleteEstimate(id: $id) { success message } }",
    )
    .with_variables(json!({ "id": id }))
}
