use std::collections::HashMap;
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use tokio::time::Instant;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memory::{CacheConnectorMemory, MemoryEntry};
use crate::cache::traits::cache_backend::CacheBackend;

impl MemoryEntry {
    /// A zero ttl, or one too large to represent, never expires.
    pub fn new(value: &str, ttl: Duration) -> Self {
        Self {
            value: value.to_string(),
            expires_at: if ttl.is_zero() { None } else { Instant::now().checked_add(ttl) },
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

impl CacheConnectorMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drops every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - entries.len();
        if removed > 0 {
            debug!("[Memory] Purged {} expired keys", removed);
        }
        removed
    }

    fn read_live(&self, key: &str, now: Instant) -> Option<String> {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired(now) => return Some(entry.value.clone()),
                Some(_) => {}
            }
        }
        let mut entries = self.entries.write();
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
        }
        None
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemory {
    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.read_live(key, Instant::now()))
    }

    async fn multi_get(&self, keys: &[String]) -> Result<HashMap<String, String>, CacheError> {
        let now = Instant::now();
        Ok(keys
            .iter()
            .filter_map(|key| self.read_live(key, now).map(|value| (key.clone(), value)))
            .collect())
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        self.entries.write().insert(key.to_string(), MemoryEntry::new(value, ttl));
        Ok(())
    }

    async fn multi_set(&self, entries: &[(String, String)], ttl: Duration) -> Result<(), CacheError> {
        let mut map = self.entries.write();
        for (key, value) in entries {
            map.insert(key.clone(), MemoryEntry::new(value, ttl));
        }
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), CacheError> {
        self.entries.write().remove(key);
        Ok(())
    }
}
