//! The request pipeline.
//!
//! Every operation traverses the same chain: the authorization header is
//! rendered from the credential cell, the request crosses the transport,
//! and the response is classified. Auth failures engage the single-flight
//! refresh and a transparent replay of the original request; validation
//! failures are handed to the validation hook and surfaced without retry;
//! unmatched transport failures go to the generic error hook. The caller's
//! awaited result does not resolve until refresh plus replay (or refresh
//! failure) has settled.

use std::sync::Arc;

use fieldlink_domain::GraphqlRequest;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::{CredentialCell, RefreshCoordinator};
use crate::cache::QueryCache;
use crate::classify::{Classification, classify_errors, classify_transport_failure};
use crate::error::{SdkError, SdkResult};
use crate::options::ClientOptions;
use crate::ports::{GraphqlTransport, RequestHeaders};

/// One pipeline traversal's conclusion, before retry handling.
enum Attempt {
    /// Data came back clean.
    Success(serde_json::Value),
    /// An auth-failure signal matched; the refresh flow decides next.
    AuthFailure,
    /// Terminal failure; surface to the caller as-is.
    Failed(SdkError),
}

/// The interception layer every SDK operation runs through.
pub struct RequestPipeline {
    transport: Arc<dyn GraphqlTransport>,
    credentials: CredentialCell,
    refresher: RefreshCoordinator,
    cache: QueryCache,
    options: ClientOptions,
}

impl RequestPipeline {
    /// Wires a pipeline over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn GraphqlTransport>, options: ClientOptions) -> Self {
        Self {
            transport,
            credentials: CredentialCell::new(options.token.clone()),
            refresher: RefreshCoordinator::new(),
            cache: QueryCache::new(),
            options,
        }
    }

    /// The credential cell shared with this pipeline.
    #[must_use]
    pub const fn credentials(&self) -> &CredentialCell {
        &self.credentials
    }

    /// The query cache shared with this pipeline.
    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Replaces the credential. No network traffic, no pipeline rebuild.
    pub async fn set_token(&self, token: Option<String>) {
        self.credentials.set(token).await;
    }

    /// Clears the credential and every cached read result.
    pub async fn logout(&self) {
        self.credentials.clear().await;
        self.cache.clear().await;
    }

    /// Caller-initiated mirror of the interceptor refresh flow: runs the
    /// configured refresh (joining any in-flight attempt) and adopts the
    /// new credential on success.
    ///
    /// Returns `true` when a fresh credential was adopted. When no refresh
    /// function is configured, or the refresh yields nothing, the
    /// unauthorized hook fires and `false` is returned.
    pub async fn refresh_credential(&self) -> bool {
        let Some(refresh) = self.options.refresh_token.clone() else {
            self.notify_unauthorized();
            return false;
        };
        match self.refresher.run(refresh).await {
            Some(token) => {
                self.credentials.set(Some(token)).await;
                true
            }
            None => {
                self.notify_unauthorized();
                false
            }
        }
    }

    /// Executes one operation through the full chain, including refresh
    /// and a single transparent replay on auth failure.
    ///
    /// # Errors
    /// Returns the classified failure: [`SdkError::Unauthorized`] when
    /// authorization could not be recovered, [`SdkError::Validation`] for
    /// field-attributed rejections, [`SdkError::Graphql`] for other domain
    /// errors, or [`SdkError::Transport`] for network failures.
    pub async fn execute(&self, request: &GraphqlRequest) -> SdkResult<serde_json::Value> {
        let request_id = Uuid::now_v7();
        debug!(%request_id, operation = %request.operation_name, "dispatching operation");

        match self.attempt(request).await {
            Attempt::Success(data) => Ok(data),
            Attempt::Failed(error) => Err(error),
            Attempt::AuthFailure => self.refresh_and_replay(request, request_id).await,
        }
    }

    /// Executes a read operation and stores its payload in the cache.
    ///
    /// # Errors
    /// Propagates [`execute`](Self::execute) failures unchanged.
    pub async fn query(&self, request: &GraphqlRequest) -> SdkResult<serde_json::Value> {
        let data = self.execute(request).await?;
        self.cache.store(request, data.clone()).await;
        Ok(data)
    }

    /// Executes a mutation, then invalidates and re-runs the declared read
    /// operations so cached results reflect the new state.
    ///
    /// A refetch failure is logged and swallowed: the mutation is already
    /// committed server-side, and its result belongs to the caller.
    ///
    /// # Errors
    /// Propagates [`execute`](Self::execute) failures of the mutation
    /// itself unchanged.
    pub async fn mutate(
        &self,
        request: &GraphqlRequest,
        refetch: &[GraphqlRequest],
    ) -> SdkResult<serde_json::Value> {
        let data = self.execute(request).await?;
        for read in refetch {
            self.cache.invalidate(read).await;
            if let Err(error) = self.query(read).await {
                warn!(
                    operation = %read.operation_name,
                    %error,
                    "refetch after mutation failed"
                );
            }
        }
        Ok(data)
    }

    /// One traversal: headers, transport, classification, hook dispatch.
    async fn attempt(&self, request: &GraphqlRequest) -> Attempt {
        let headers = self.build_headers().await;

        match self.transport.send(request, &headers).await {
            Ok(response) => {
                let classification = classify_errors(&response.errors);
                self.dispatch_validation(&classification);

                if response.errors.is_empty() {
                    return match response.data {
                        Some(data) => Attempt::Success(data),
                        None => Attempt::Failed(SdkError::MissingData {
                            operation: request.operation_name.clone(),
                        }),
                    };
                }
                if classification.auth_failure {
                    warn!(operation = %request.operation_name, "auth failure in response");
                    return Attempt::AuthFailure;
                }
                if !classification.validation_errors.is_empty() {
                    return Attempt::Failed(SdkError::Validation(
                        classification.validation_errors,
                    ));
                }
                Attempt::Failed(SdkError::Graphql(response.errors))
            }
            Err(transport_error) => {
                let classification = classify_transport_failure(&transport_error);
                self.dispatch_validation(&classification);

                if classification.auth_failure {
                    warn!(operation = %request.operation_name, "auth failure at transport");
                    return Attempt::AuthFailure;
                }
                if let Some(handler) = &self.options.on_error {
                    handler(&transport_error);
                }
                Attempt::Failed(SdkError::Transport(transport_error))
            }
        }
    }

    /// The refresh flow: run (or join) the single-flight refresh, adopt
    /// the new credential, replay the original request once.
    ///
    /// A replayed request that fails auth again is not refreshed a second
    /// time; it surfaces as unauthorized.
    async fn refresh_and_replay(
        &self,
        request: &GraphqlRequest,
        request_id: Uuid,
    ) -> SdkResult<serde_json::Value> {
        let Some(refresh) = self.options.refresh_token.clone() else {
            debug!(%request_id, "no refresh function configured");
            self.notify_unauthorized();
            return Err(SdkError::Unauthorized);
        };

        match self.refresher.run(refresh).await {
            Some(token) => {
                self.credentials.set(Some(token)).await;
                debug!(%request_id, operation = %request.operation_name, "replaying request");
                match self.attempt(request).await {
                    Attempt::Success(data) => Ok(data),
                    Attempt::Failed(error) => Err(error),
                    Attempt::AuthFailure => {
                        self.notify_unauthorized();
                        Err(SdkError::Unauthorized)
                    }
                }
            }
            None => {
                self.notify_unauthorized();
                Err(SdkError::Unauthorized)
            }
        }
    }

    async fn build_headers(&self) -> RequestHeaders {
        let mut headers = RequestHeaders::new();
        if let Some(authorization) = self.credentials.authorization_header().await {
            headers.insert("authorization".to_string(), authorization);
        }
        headers
    }

    /// Validation hook dispatch. Fires unconditionally when errors were
    /// extracted, even when the same response also flagged an auth
    /// failure.
    fn dispatch_validation(&self, classification: &Classification) {
        if classification.validation_errors.is_empty() {
            return;
        }
        if let Some(handler) = &self.options.on_validation_error {
            handler(&classification.validation_errors);
        }
    }

    fn notify_unauthorized(&self) {
        if let Some(handler) = &self.options.on_unauthorized {
            handler();
        }
    }
}

impl std::fmt::Debug for RequestPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestPipeline")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
