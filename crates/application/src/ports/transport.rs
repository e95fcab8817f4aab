//! Transport port: the network boundary of the pipeline.

use std::collections::BTreeMap;

use async_trait::async_trait;
use fieldlink_domain::{GraphqlRequest, GraphqlResponse};
use thiserror::Error;

/// Headers attached to an outgoing request.
///
/// Ordered map so header sets compare and log deterministically.
pub type RequestHeaders = BTreeMap<String, String>;

/// The network boundary: performs one GraphQL POST and returns either the
/// response envelope or a transport failure.
///
/// Implementations must not interpret domain errors; classification belongs
/// to the pipeline.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// Sends one request with the given headers.
    ///
    /// # Errors
    /// Returns a [`TransportError`] for any failure below the GraphQL
    /// layer: connection problems, timeouts, non-success HTTP statuses, or
    /// an unparseable response body.
    async fn send(
        &self,
        request: &GraphqlRequest,
        headers: &RequestHeaders,
    ) -> Result<GraphqlResponse, TransportError>;
}

/// Failures below the GraphQL layer.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The endpoint URL could not be parsed.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The host could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver message.
        message: String,
    },

    /// The host refused the connection.
    #[error("connection refused by {host}")]
    ConnectionRefused {
        /// Host that refused.
        host: String,
    },

    /// Any other connection-level failure.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The server answered with a non-success HTTP status.
    ///
    /// The body is kept verbatim so the classifier can scan embedded
    /// GraphQL error arrays in server-side error pages.
    #[error("HTTP status {status}: {body}")]
    HttpStatus {
        /// Status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The response body was not a valid GraphQL envelope.
    #[error("invalid response body: {0}")]
    InvalidBody(String),

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// The failure message the classifier matches auth signals against.
    ///
    /// For HTTP-status failures this is the raw body (where the backend
    /// embeds its error text); for everything else, the display form.
    #[must_use]
    pub fn signal_text(&self) -> String {
        match self {
            Self::HttpStatus { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}
