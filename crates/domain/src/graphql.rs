//! GraphQL wire types.
//!
//! The request/response shapes the transport layer exchanges with the
//! backend. The SDK treats operation documents as opaque text; the only
//! structure it relies on is the response envelope (`data` plus an optional
//! `errors` array per the GraphQL spec).

use serde::{Deserialize, Serialize};

/// A single GraphQL operation ready to be sent.
///
/// Carries the operation name (used for cache keys and logging), the
/// document text, and the serialized variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    /// Operation name as declared in the document.
    pub operation_name: String,
    /// The full operation document.
    pub query: String,
    /// Operation variables, already serialized to JSON.
    pub variables: serde_json::Value,
}

impl GraphqlRequest {
    /// Creates a request with no variables.
    #[must_use]
    pub fn new(operation_name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            operation_name: operation_name.into(),
            query: query.into(),
            variables: serde_json::Value::Null,
        }
    }

    /// Attaches variables to the request.
    #[must_use]
    pub fn with_variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = variables;
        self
    }
}

/// A GraphQL response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphqlResponse {
    /// The data payload, absent when the operation failed outright.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// Structured domain errors returned alongside or instead of data.
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    /// Returns `true` if the response carries no domain errors.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A structured domain error (per the GraphQL spec).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    /// Human-readable error message.
    pub message: String,
    /// Location(s) within the query document.
    #[serde(default)]
    pub locations: Vec<ErrorLocation>,
    /// Path within the response where the error occurred.
    #[serde(default)]
    pub path: Vec<PathSegment>,
    /// Server-specific extensions metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

impl GraphqlError {
    /// Creates an error carrying only a message.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
            path: Vec::new(),
            extensions: None,
        }
    }
}

/// Location of an error within the query document (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    /// Line number.
    pub line: u32,
    /// Column number.
    pub column: u32,
}

/// A segment of a GraphQL response path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Field name.
    Key(String),
    /// Array index.
    Index(i64),
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn response_deserializes_data_and_errors() {
        let raw = r#"{
            "data": {"clients": []},
            "errors": [{"message": "boom", "path": ["clients", 0]}]
        }"#;
        let response: GraphqlResponse = serde_json::from_str(raw).unwrap();
        assert!(!response.is_ok());
        assert_eq!(response.errors[0].message, "boom");
        assert_eq!(
            response.errors[0].path,
            vec![PathSegment::Key("clients".into()), PathSegment::Index(0)]
        );
    }

    #[test]
    fn response_without_errors_is_ok() {
        let raw = r#"{"data": {"job": null}}"#;
        let response: GraphqlResponse = serde_json::from_str(raw).unwrap();
        assert!(response.is_ok());
    }

    #[test]
    fn request_serializes_operation_name_camel_case() {
        let request = GraphqlRequest::new("GetClients", "query GetClients { clients { id } }");
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("operationName").is_some());
    }
}
