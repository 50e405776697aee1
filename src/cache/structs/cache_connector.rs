use std::sync::Arc;
use std::time::Duration;
use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::traits::cache_backend::CacheBackend;

/// Typed access to the configured cache backend.
///
/// Every key is stored as `prefix + key`; values are JSON. The reserved
/// value [`CacheConnector::NOT_FOUND_PLACEHOLDER`] marks a key the store
/// confirmed absent and lives for `not_found_ttl`.
#[derive(Clone)]
pub struct CacheConnector {
    pub(crate) backend: Arc<dyn CacheBackend>,
    pub(crate) engine: CacheEngine,
    pub(crate) prefix: String,
    pub(crate) not_found_ttl: Duration,
    pub(crate) memory: Option<CacheConnectorMemory>,
}
