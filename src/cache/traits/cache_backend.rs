use std::collections::HashMap;
use std::time::Duration;
use async_trait::async_trait;
use crate::cache::errors::CacheError;

/// Raw storage contract shared by every cache engine.
///
/// Keys arrive fully qualified. A zero `ttl` stores the value without
/// expiry. `multi_get` returns only the keys that are present.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn ping(&self) -> Result<(), CacheError>;

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn multi_get(&self, keys: &[String]) -> Result<HashMap<String, String>, CacheError>;

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;

    async fn multi_set(&self, entries: &[(String, String)], ttl: Duration) -> Result<(), CacheError>;

    /// Succeeds when the key does not exist.
    async fn del(&self, key: &str) -> Result<(), CacheError>;
}
