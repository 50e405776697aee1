use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use parking_lot::Mutex;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::traits::cache_backend::CacheBackend;

impl fmt::Debug for CacheConnectorMemcache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorMemcache")
            .field("client", &"<memcache::Client>")
            .finish()
    }
}

impl CacheConnectorMemcache {
    pub fn connect(url: &str) -> Result<Self, CacheError> {
        let client = memcache::connect(url)
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Memcache: {}", e)))?;
        Ok(Self {
            client: Arc::new(Mutex::new(client)),
        })
    }

    /// Memcache counts whole seconds; a sub-second ttl is rounded up so it
    /// does not turn into "never expires".
    pub(crate) fn expiration(ttl: Duration) -> u32 {
        if ttl.is_zero() {
            return 0;
        }
        let seconds = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
        u32::try_from(seconds).unwrap_or(u32::MAX)
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemcache {
    async fn ping(&self) -> Result<(), CacheError> {
        let client = self.client.lock();
        client.version()
            .map_err(CacheError::MemcacheError)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let client = self.client.lock();
        client.get::<String>(key).map_err(CacheError::MemcacheError)
    }

    async fn multi_get(&self, keys: &[String]) -> Result<HashMap<String, String>, CacheError> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }
        let client = self.client.lock();
        let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
        client.gets::<String>(&keys).map_err(CacheError::MemcacheError)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let client = self.client.lock();
        client.set(key, value, Self::expiration(ttl))
            .map_err(CacheError::MemcacheError)?;
        debug!("[Memcache] Set {} ttl={:?}", key, ttl);
        Ok(())
    }

    async fn multi_set(&self, entries: &[(String, String)], ttl: Duration) -> Result<(), CacheError> {
        if entries.is_empty() {
            return Ok(());
        }
        let client = self.client.lock();
        let expiration = Self::expiration(ttl);
        for (key, value) in entries {
            client.set(key.as_str(), value.as_str(), expiration)
                .map_err(CacheError::MemcacheError)?;
        }
        debug!("[Memcache] Batch set {} keys", entries.len());
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), CacheError> {
        let client = self.client.lock();
        client.delete(key).map_err(CacheError::MemcacheError)?;
        debug!("[Memcache] Deleted {}", key);
        Ok(())
    }
}
