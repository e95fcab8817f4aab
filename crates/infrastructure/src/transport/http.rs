//! GraphQL-over-HTTP transport using reqwest.
//!
//! This adapter implements the `GraphqlTransport` port. It POSTs the
//! operation envelope as JSON, forwards the pipeline's headers verbatim,
//! and maps reqwest failures to `TransportError`. Non-success statuses
//! keep their body so the classifier can scan embedded error arrays.

use std::time::Duration;

use async_trait::async_trait;
use fieldlink_application::ports::{GraphqlTransport, RequestHeaders, TransportError};
use fieldlink_domain::{GraphqlRequest, GraphqlResponse};
use reqwest::Client;
use tracing::debug;
use url::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("FieldLink/", env!("CARGO_PKG_VERSION"));

/// The reqwest-backed transport adapter.
pub struct HttpGraphqlTransport {
    client: Client,
    endpoint: Url,
}

impl HttpGraphqlTransport {
    /// Creates a transport posting to the given endpoint.
    ///
    /// Default configuration:
    /// - Request timeout: 30 seconds
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint does not parse as a URL or the
    /// client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let endpoint = Url::parse(base_url)
            .map_err(|error| TransportError::InvalidEndpoint(format!("{base_url}: {error}")))?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|error| TransportError::Other(error.to_string()))?;
        Ok(Self { client, endpoint })
    }

    /// Creates a transport with a caller-configured reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// The endpoint this transport posts to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Maps reqwest errors to the port's error type.
    fn map_error(error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                timeout_ms: u64::try_from(DEFAULT_TIMEOUT.as_millis()).unwrap_or(u64::MAX),
            };
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return TransportError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                return TransportError::ConnectionRefused { host };
            }
            return TransportError::ConnectionFailed(message);
        }

        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl GraphqlTransport for HttpGraphqlTransport {
    async fn send(
        &self,
        request: &GraphqlRequest,
        headers: &RequestHeaders,
    ) -> Result<GraphqlResponse, TransportError> {
        let mut builder = self.client.post(self.endpoint.clone()).json(request);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| Self::map_error(&e))?;

        debug!(
            operation = %request.operation_name,
            status = status.as_u16(),
            "received response"
        );

        if !status.is_success() {
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|error| TransportError::InvalidBody(error.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_endpoint() {
        let result = HttpGraphqlTransport::new("not a url");
        assert!(matches!(result, Err(TransportError::InvalidEndpoint(_))));
    }

    #[test]
    fn keeps_endpoint_verbatim() {
        let transport = HttpGraphqlTransport::new("http://localhost:8000/api/graph/").unwrap();
        assert_eq!(
            transport.endpoint().as_str(),
            "http://localhost:8000/api/graph/"
        );
    }
}
