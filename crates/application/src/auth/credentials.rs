//! Shared bearer-credential cell.
//!
//! The credential is a mutable cell read at request-build time, so a token
//! change never requires rebuilding the pipeline — only the cell is updated.

use std::sync::Arc;
use tokio::sync::RwLock;

/// Header scheme the backend expects for bearer tokens.
const AUTH_SCHEME: &str = "JWT";

/// Thread-safe cell holding at most one bearer token.
///
/// `set` is the only mutation path; it is used by `set_token`, by the
/// refresh coordinator on success, and by `logout` (which clears it).
#[derive(Debug, Clone, Default)]
pub struct CredentialCell {
    token: Arc<RwLock<Option<String>>>,
}

impl CredentialCell {
    /// Creates a cell holding the given initial token.
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(token)),
        }
    }

    /// Replaces the credential. `None` clears it.
    pub async fn set(&self, token: Option<String>) {
        let mut slot = self.token.write().await;
        *slot = token;
    }

    /// Clears the credential.
    pub async fn clear(&self) {
        self.set(None).await;
    }

    /// Returns a copy of the current token.
    pub async fn get(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Renders the `authorization` header value, or `None` when no
    /// credential is held (the header is then omitted entirely).
    pub async fn authorization_header(&self) -> Option<String> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|token| format!("{AUTH_SCHEME} {token}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn renders_jwt_header() {
        let cell = CredentialCell::new(Some("abc".into()));
        assert_eq!(cell.authorization_header().await.as_deref(), Some("JWT abc"));
    }

    #[tokio::test]
    async fn empty_cell_omits_header() {
        let cell = CredentialCell::default();
        assert_eq!(cell.authorization_header().await, None);
    }

    #[tokio::test]
    async fn set_replaces_and_clear_empties() {
        let cell = CredentialCell::new(Some("old".into()));
        cell.set(Some("new".into())).await;
        assert_eq!(cell.get().await.as_deref(), Some("new"));

        cell.clear().await;
        assert_eq!(cell.get().await, None);
    }

    #[tokio::test]
    async fn set_is_idempotent() {
        let cell = CredentialCell::default();
        cell.set(Some("x".into())).await;
        cell.set(Some("x".into())).await;
        assert_eq!(cell.get().await.as_deref(), Some("x"));
    }
}
