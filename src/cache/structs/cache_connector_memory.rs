use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::RwLock;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct MemoryEntry {
    pub(crate) value: String,
    pub(crate) expires_at: Option<Instant>,
}

/// In-process backend; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct CacheConnectorMemory {
    pub(crate) entries: Arc<RwLock<AHashMap<String, MemoryEntry>>>,
}
