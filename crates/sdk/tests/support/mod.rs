//! In-memory transports for scenario tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)] // each test binary uses a subset

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use fieldlink::{
    GraphqlError, GraphqlRequest, GraphqlResponse, GraphqlTransport, RequestHeaders,
    TransportError,
};
use serde_json::json;

/// One recorded traversal of the transport boundary.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub operation: String,
    pub headers: RequestHeaders,
}

/// Transport that replays a fixed script of results, in order.
///
/// Panics when the script runs dry, so a test that makes more network
/// calls than it declared fails loudly.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<GraphqlResponse, TransportError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new(
        script: impl IntoIterator<Item = Result<GraphqlResponse, TransportError>>,
    ) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphqlTransport for ScriptedTransport {
    async fn send(
        &self,
        request: &GraphqlRequest,
        headers: &RequestHeaders,
    ) -> Result<GraphqlResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            operation: request.operation_name.clone(),
            headers: headers.clone(),
        });
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted call: {}", request.operation_name))
    }
}

/// Transport that accepts exactly one authorization header value.
///
/// A request carrying `expected_authorization` succeeds with the given
/// data; anything else gets an auth-failure error response. This models a
/// backend whose old token has expired.
pub struct GatedTransport {
    expected_authorization: String,
    data: serde_json::Value,
    calls: Mutex<Vec<RecordedCall>>,
}

impl GatedTransport {
    pub fn new(expected_authorization: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            expected_authorization: expected_authorization.into(),
            data,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphqlTransport for GatedTransport {
    async fn send(
        &self,
        request: &GraphqlRequest,
        headers: &RequestHeaders,
    ) -> Result<GraphqlResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            operation: request.operation_name.clone(),
            headers: headers.clone(),
        });
        if headers.get("authorization") == Some(&self.expected_authorization) {
            Ok(GraphqlResponse {
                data: Some(self.data.clone()),
                errors: Vec::new(),
            })
        } else {
            Ok(GraphqlResponse {
                data: None,
                errors: vec![GraphqlError::from_message("Signature has expired")],
            })
        }
    }
}

/// A clean success envelope.
pub fn ok(data: serde_json::Value) -> Result<GraphqlResponse, TransportError> {
    Ok(GraphqlResponse {
        data: Some(data),
        errors: Vec::new(),
    })
}

/// An envelope carrying only domain errors.
pub fn errors(messages: &[&str]) -> Result<GraphqlResponse, TransportError> {
    Ok(GraphqlResponse {
        data: None,
        errors: messages
            .iter()
            .map(|message| GraphqlError::from_message(*message))
            .collect(),
    })
}

/// An empty client list, the stock payload for `GetClients`.
pub fn empty_clients() -> serde_json::Value {
    json!({"clients": []})
}
