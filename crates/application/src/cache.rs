//! In-memory query cache.
//!
//! Holds the last successful `data` payload per read operation, keyed by
//! operation name plus canonical variables. Reads always hit the network
//! and update the cache; mutations invalidate and refetch their declared
//! reads; `logout` clears everything.

use std::collections::HashMap;
use std::sync::Arc;

use fieldlink_domain::GraphqlRequest;
use tokio::sync::RwLock;

/// Cache key: operation name plus serialized variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    operation: String,
    variables: String,
}

impl CacheKey {
    fn for_request(request: &GraphqlRequest) -> Self {
        Self {
            operation: request.operation_name.clone(),
            variables: request.variables.to_string(),
        }
    }
}

/// Thread-safe store of cached read results.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: Arc<RwLock<HashMap<CacheKey, serde_json::Value>>>,
}

impl QueryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the data payload for a read operation.
    pub async fn store(&self, request: &GraphqlRequest, data: serde_json::Value) {
        let mut entries = self.entries.write().await;
        entries.insert(CacheKey::for_request(request), data);
    }

    /// Returns the cached payload for a read operation, if any.
    pub async fn get(&self, request: &GraphqlRequest) -> Option<serde_json::Value> {
        let entries = self.entries.read().await;
        entries.get(&CacheKey::for_request(request)).cloned()
    }

    /// Drops the cached payload for a read operation.
    pub async fn invalidate(&self, request: &GraphqlRequest) {
        let mut entries = self.entries.write().await;
        entries.remove(&CacheKey::for_request(request));
    }

    /// Drops every cached payload.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns `true` when nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn request(operation: &str, variables: serde_json::Value) -> GraphqlRequest {
        GraphqlRequest::new(operation, "query { _ }").with_variables(variables)
    }

    #[tokio::test]
    async fn store_and_get_round_trip() {
        let cache = QueryCache::new();
        let read = request("GetClients", serde_json::Value::Null);
        cache.store(&read, json!({"clients": []})).await;
        assert_eq!(cache.get(&read).await, Some(json!({"clients": []})));
    }

    #[tokio::test]
    async fn variables_distinguish_entries() {
        let cache = QueryCache::new();
        let job_1 = request("GetJob", json!({"id": "1"}));
        let job_2 = request("GetJob", json!({"id": "2"}));
        cache.store(&job_1, json!({"job": {"id": "1"}})).await;

        assert!(cache.get(&job_1).await.is_some());
        assert_eq!(cache.get(&job_2).await, None);
    }

    #[tokio::test]
    async fn invalidate_removes_one_entry() {
        let cache = QueryCache::new();
        let read = request("GetClients", serde_json::Value::Null);
        cache.store(&read, json!({})).await;
        cache.invalidate(&read).await;
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let cache = QueryCache::new();
        cache.store(&request("A", serde_json::Value::Null), json!(1)).await;
        cache.store(&request("B", serde_json::Value::Null), json!(2)).await;
        assert_eq!(cache.len().await, 2);

        cache.clear().await;
        assert!(cache.is_empty().await);
    }
}
