//! SDK configuration surface.

use std::fmt;
use std::sync::Arc;

use fieldlink_domain::ValidationError;
use futures_util::future::BoxFuture;

use crate::ports::TransportError;

/// Callback invoked when authorization fails and no refresh is available,
/// or the refresh itself fails.
pub type UnauthorizedHandler = Arc<dyn Fn() + Send + Sync>;

/// Callback invoked for transport failures that match no auth signal.
pub type ErrorHandler = Arc<dyn Fn(&TransportError) + Send + Sync>;

/// Callback invoked with the full set of extracted validation errors.
pub type ValidationHandler = Arc<dyn Fn(&[ValidationError]) + Send + Sync>;

/// Caller-supplied credential refresh.
///
/// Resolves to the new bearer token, or `None` when no fresh credential
/// could be obtained (covers both a null result and an internal failure;
/// either way the pipeline surfaces unauthorized).
pub type RefreshFunction = Arc<dyn Fn() -> BoxFuture<'static, Option<String>> + Send + Sync>;

/// Configuration for constructing the SDK.
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// GraphQL endpoint root. Caller-supplied, used as-is.
    pub base_url: String,
    /// Initial bearer token, if already authenticated.
    pub token: Option<String>,
    /// Credential refresh hook.
    pub refresh_token: Option<RefreshFunction>,
    /// Unauthorized notification hook.
    pub on_unauthorized: Option<UnauthorizedHandler>,
    /// Generic transport failure hook.
    pub on_error: Option<ErrorHandler>,
    /// Validation failure hook.
    pub on_validation_error: Option<ValidationHandler>,
}

impl ClientOptions {
    /// Creates options pointing at the given endpoint.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the initial bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the credential refresh hook.
    #[must_use]
    pub fn with_refresh_token(mut self, refresh: RefreshFunction) -> Self {
        self.refresh_token = Some(refresh);
        self
    }

    /// Sets the unauthorized notification hook.
    #[must_use]
    pub fn with_on_unauthorized(mut self, handler: UnauthorizedHandler) -> Self {
        self.on_unauthorized = Some(handler);
        self
    }

    /// Sets the generic transport failure hook.
    #[must_use]
    pub fn with_on_error(mut self, handler: ErrorHandler) -> Self {
        self.on_error = Some(handler);
        self
    }

    /// Sets the validation failure hook.
    #[must_use]
    pub fn with_on_validation_error(mut self, handler: ValidationHandler) -> Self {
        self.on_validation_error = Some(handler);
        self
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("refresh_token", &self.refresh_token.is_some())
            .field("on_unauthorized", &self.on_unauthorized.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_validation_error", &self.on_validation_error.is_some())
            .finish()
    }
}
