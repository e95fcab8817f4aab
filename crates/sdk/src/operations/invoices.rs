//! Invoice operations.

use fieldlink_domain::{GraphqlRequest, InvoiceInput};
use serde_json::json;

const INVOICE_FIELDS: &str = "id date status total applyTaxes dueDate createdAt updatedAt \
                              job { id title } \
                              lineItems { id title description price type taxType }";

/// `GetInvoicesForJob` request.
#[must_use]
pub fn get_invoices_for_job(job_id: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "GetInvoicesForJob",
        format!(
            "query GetInvoicesForJob($jobId: ID!) \
             {{ invoices(jobId: $jobId) {{ {INVOICE_FIELDS} }} }}"
        ),
    )
    .with_variables(json!({ "jobId": job_id }))
}

/// `GetInvoice` request.
#[must_use]
pub fn get_invoice(id: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "GetInvoice",
        format!("query GetInvoice($id: ID!) {{ invoice(id: $id) {{ {INVOICE_FIELDS} }} }}"),
    )
    .with_variables(json!({ "id": id }))
}

/// `CreateInvoice` request.
#[must_use]
pub fn create_invoice(input: &InvoiceInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "CreateInvoice",
        format!(
            "mutation CreateInvoice($input: InvoiceInput!) \
             {{ createInvoice(input: $input) \
             {{ invoice {{ {INVOICE_FIELDS} }} success message }} }}"
        ),
    )
    .with_variables(json!({ "input": input }))
}

/// `UpdateInvoice` request.
#[must_use]
pub fn update_invoice(id: &str, input: &InvoiceInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "UpdateInvoice",
        format!(
            "mutation UpdateInvoice($id: ID!, $input: InvoiceInput!) \
             {{ updateInvoice(id: $id, input: $input) \
             {{ invoice {{ {INVOICE_FIELDS} }} success message }} }}"
        ),
    )
    .with_variables(json!({ "id": id, "input": input }))
}

/// `DeleteInvoice` request.
#[must_use]
pub fn delete_invoice(id: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "DeleteInvoice",
        "mutation DeleteInvoice($id: ID!) { deleteInvoice(id: $id) { success message } }",
    )
    .with_variables(json!({ "id": id }))
}
