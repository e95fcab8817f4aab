//! File upload, devices, document generation, and feedback operations.

use fieldlink_domain::{DeviceRegistrationInput, FileUploadInput, GraphqlRequest};
use serde_json::json;

/// `UploadFile` request.
#[must_use]
pub fn upload_file(input: &FileUploadInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "UploadFile",
        "mutation UploadFile($input: FileUploadInput!) \
         { uploadFile(input: $input) { success message fileUrl } }",
    )
    .with_variables(json!({ "input": input }))
}

/// `RegisterDevice` request.
#[must_use]
pub fn register_device(input: &DeviceRegistrationInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "RegisterDevice",
        "mutation RegisterDevice($input: DeviceRegistrationInput!) \
         { registerDevice(input: $input) \
         { device { deviceToken deviceType isActive lastUsed } success message } }",
    )
    .with_variables(json!({ "input": input }))
}

/// `UpdateOrRegisterDevice` request: upserts a device registration.
#[must_use]
pub fn update_or_register_device(input: &DeviceRegistrationInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "UpdateOrRegisterDevice",
        "mutation UpdateOrRegisterDevice($input: DeviceRegistrationInput!) \
         { updateOrRegisterDevice(input: $input) \
         { device { deviceToken deviceType isActive lastUsed } success message } }",
    )
    .with_variables(json!({ "input": input }))
}

/// `GenerateDocumentPdf` request for an estimate or invoice.
#[must_use]
pub fn generate_document_pdf(document_type: &str, document_id: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "GenerateDocumentPdf",
        "mutation GenerateDocumentPdf($documentType: String!, $documentId: ID!) \
         { generateDocumentPdf(documentType: $documentType, documentId: $documentId) \
         { success message documentUrl } }",
    )
    .with_variables(json!({
        "documentType": document_type,
        "documentId": document_id,
    }))
}

/// `SubmitFeedback` request.
#[must_use]
pub fn submit_feedback(description: &str, page_url: Option<&str>) -> GraphqlRequest {
    GraphqlRequest::new(
        "SubmitFeedback",
        "mutation SubmitFeedback($description: String!, $pageUrl: String) \
         { submitFeedback(description: $description, pageUrl: $pageUrl) \
         { feedback { id user pageUrl description createdAt } success message } }",
    )
    .with_variables(json!({
        "description": description,
        "pageUrl": page_url,
    }))
}
