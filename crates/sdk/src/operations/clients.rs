//! Client (customer) operations.

use fieldlink_domain::{ClientInput, GraphqlRequest};
use serde_json::json;

const CLIENT_FIELDS: &str = "id name email phone address1 address2 city state zipCode notes \
                             locationLatitude locationLongitude createdAt updatedAt";

/// `GetClients` request.
#[must_use]
pub fn get_clients() -> GraphqlRequest {
    GraphqlRequest::new(
        "GetClients",
        format!("query GetClients {{ clients {{ {CLIENT_FIELDS} }} }}"),
    )
}

/// `GetClient` request.
#[must_use]
pub fn get_client(id: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "GetClient",
        format!("query GetClient($id: ID!) {{ client(id: $id) {{ {CLIENT_FIELDS} }} }}"),
    )
    .with_variables(json!({ "id": id }))
}

/// `CreateClient` request.
#[must_use]
pub fn create_client(input: &ClientInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "CreateClient",
        format!(
            "mutation CreateClient($input: ClientInput!) {{ createClient(input: $input) \
             {{ client {{ {CLIENT_FIELDS} }} success message }} }}"
        ),
    )
    .with_variables(json!({ "input": input }))
}

/// `UpdateClient` request.
#[must_use]
pub fn update_client(id: &str, input: &ClientInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "UpdateClient",
        format!(
            "mutation UpdateClient($id: ID!, $input: ClientInput!) \
             {{ updateClient(id: $id, input: $input) \
             {{ client {{ {CLIENT_FIELDS} }} success message }} }}"
        ),
    )
    .with_variables(json!({ "id": id, "input": input }))
}

/// `DeleteClient` request.
#[must_use]
pub fn delete_client(id: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "DeleteClient",
        "mutation DeleteClient($id: ID!) { deleteClient(id: $id) { success message } }",
    )
    .with_variables(json!({ "id": id }))
}
