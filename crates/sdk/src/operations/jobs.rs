//! Job operations.

use fieldlink_domain::{GraphqlRequest, JobFilter, JobInput};
use serde_json::json;

const LINE_ITEM_FIELDS: &str = "id title description price type taxType";

/// Fields fetched for a full job, including nested documents.
fn job_fields() -> String {
    format!(
        "id title description status scheduledDate dueDate createdAt updatedAt \
         client {{ id name email phone }} \
         estimates {{ id date status total lineItems {{ {LINE_ITEM_FIELDS} }} }} \
         invoices {{ id date status total dueDate lineItems {{ {LINE_ITEM_FIELDS} }} }}"
    )
}

/// `GetJobs` request, optionally filtered.
#[must_use]
pub fn get_jobs(filter: Option<&JobFilter>) -> GraphqlRequest {
    let fields = job_fields();
    let request = GraphqlRequest::new(
        "GetJobs",
        format!(
            "query GetJobs($filter: JobFilterInput) {{ jobs(filter: $filter) {{ {fields} }} }}"
        ),
    );
    match filter {
        Some(filter) => request.with_variables(json!({ "filter": filter })),
        None => request,
    }
}

/// `GetJob` request.
#[must_use]
pub fn get_job(id: &str) -> GraphqlRequest {
    let fields = job_fields();
    GraphqlRequest::new(
        "GetJob",
        format!("query GetJob($id: ID!) {{ job(id: $id) {{ {fields} }} }}"),
    )
    .with_variables(json!({ "id": id }))
}

/// `CreateJob` request.
#[must_use]
pub fn create_job(input: &JobInput) -> GraphqlRequest {
    let fields = job_fields();
    GraphqlRequest::new(
        "CreateJob",
        format!(
            "mutation CreateJob($input: JobInput!) {{ createJob(input: $input) \
             {{ job {{ {fields} }} success message }} }}"
        ),
    )
    .with_variables(json!({ "input": input }))
}

/// `UpdateJob` request.
#[must_use]
pub fn update_job(id: &str, input: &JobInput) -> GraphqlRequest {
    let fields = job_fields();
    GraphqlRequest::new(
        "UpdateJob",
        format!(
            "mutation UpdateJob($id: ID!, $input: JobInput!) \
             {{ updateJob(id: $id, input: $input) \
             {{ job {{ {fields} }} success message }} }}"
        ),
    )
    .with_variables(json!({ "id": id, "input": input }))
}

/// `DeleteJob` request.
#[must_use]
pub fn delete_job(id: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "DeleteJob",
        "mutation DeleteJob($id: ID!) { deleteJob(id: $id) { success message } }",
    )
    .with_variables(json!({ "id": id }))
}
