use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::enums::cache_lookup::CacheLookup;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;

impl fmt::Debug for CacheConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnector")
            .field("engine", &self.engine)
            .field("prefix", &self.prefix)
            .field("not_found_ttl", &self.not_found_ttl)
            .finish()
    }
}

impl CacheConnector {
    pub const NOT_FOUND_PLACEHOLDER: &'static str = "*";
    pub const DEFAULT_NOT_FOUND_TTL: Duration = Duration::from_secs(600);

    pub async fn new(config: &CacheConfig) -> Result<CacheConnector, CacheError> {
        let transaction = crate::utils::sentry_tracing::start_trace_transaction("cache_init", "cache");
        let connection_url = format!("{}{}", config.engine.url_scheme(), config.address);
        let not_found_ttl = config.not_found_ttl();
        let result: Result<CacheConnector, CacheError> = match config.engine {
            CacheEngine::redis => {
                let redis_connector = CacheConnectorRedis::connect(&connection_url).await?;
                info!("[Cache] Connected to Redis at {}", config.address);
                Ok(Self::from_backend(Arc::new(redis_connector), CacheEngine::redis, &config.prefix, not_found_ttl))
            }
            CacheEngine::memcache => {
                let memcache_connector = CacheConnectorMemcache::connect(&connection_url)?;
                info!("[Cache] Connected to Memcache at {}", config.address);
                Ok(Self::from_backend(Arc::new(memcache_connector), CacheEngine::memcache, &config.prefix, not_found_ttl))
            }
            CacheEngine::memory => {
                info!("[Cache] Using the in-process memory cache");
                Ok(Self::memory(CacheConnectorMemory::new(), &config.prefix, not_found_ttl))
            }
        };
        if let Some(txn) = transaction {
            match &result {
                Ok(_) => txn.set_tag("result", "success"),
                Err(e) => txn.set_tag("result", format!("error: {:?}", e)),
            }
            txn.set_tag("engine", config.engine.to_string());
            txn.set_tag("address", config.address.clone());
            txn.finish();
        }
        result
    }

    /// Wraps an already connected backend.
    pub fn from_backend(backend: Arc<dyn CacheBackend>, engine: CacheEngine, prefix: &str, not_found_ttl: Duration) -> CacheConnector {
        CacheConnector {
            backend,
            engine,
            prefix: prefix.to_string(),
            not_found_ttl,
            memory: None,
        }
    }

    pub fn memory(store: CacheConnectorMemory, prefix: &str, not_found_ttl: Duration) -> CacheConnector {
        CacheConnector {
            backend: Arc::new(store.clone()),
            engine: CacheEngine::memory,
            prefix: prefix.to_string(),
            not_found_ttl,
            memory: Some(store),
        }
    }

    pub fn engine(&self) -> CacheEngine {
        self.engine
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn not_found_ttl(&self) -> Duration {
        self.not_found_ttl
    }

    pub fn backend(&self) -> &dyn CacheBackend {
        self.backend.as_ref()
    }

    /// Only the memory engine keeps expired entries around until read.
    pub fn purge_expired(&self) -> usize {
        self.memory.as_ref().map_or(0, CacheConnectorMemory::purge_expired)
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    pub async fn ping(&self) -> Result<(), CacheError> {
        let transaction = crate::utils::sentry_tracing::start_trace_transaction("cache_ping", "cache");
        let result = self.backend.ping().await;
        if let Some(txn) = transaction {
            match &result {
                Ok(_) => txn.set_tag("result", "success"),
                Err(e) => txn.set_tag("result", format!("error: {:?}", e)),
            }
            txn.set_tag("engine", self.engine.to_string());
            txn.finish();
        }
        result
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<CacheLookup<T>, CacheError> {
        match self.backend.get(&self.full_key(key)).await? {
            None => Ok(CacheLookup::Miss),
            Some(value) if value == Self::NOT_FOUND_PLACEHOLDER => Ok(CacheLookup::Placeholder),
            Some(value) => Ok(CacheLookup::Hit(serde_json::from_str(&value)?)),
        }
    }

    /// Returns the hits only, keyed like the request. Misses and
    /// placeholders are both left out.
    pub async fn multi_get<T: DeserializeOwned>(&self, keys: &[String]) -> Result<HashMap<String, T>, CacheError> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }
        let full_keys: Vec<String> = keys.iter().map(|key| self.full_key(key)).collect();
        let found = self.backend.multi_get(&full_keys).await?;
        let mut result = HashMap::with_capacity(found.len());
        for (key, full_key) in keys.iter().zip(&full_keys) {
            match found.get(full_key) {
                Some(value) if value != Self::NOT_FOUND_PLACEHOLDER => {
                    result.insert(key.clone(), serde_json::from_str(value)?);
                }
                _ => {}
            }
        }
        Ok(result)
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl: Duration) -> Result<(), CacheError> {
        let encoded = serde_json::to_string(value)?;
        self.backend.set(&self.full_key(key), &encoded, ttl).await
    }

    pub async fn multi_set<T: Serialize>(&self, entries: &[(String, T)], ttl: Duration) -> Result<(), CacheError> {
        if entries.is_empty() {
            return Ok(());
        }
        let encoded = entries
            .iter()
            .map(|(key, value)| Ok((self.full_key(key), serde_json::to_string(value)?)))
            .collect::<Result<Vec<_>, CacheError>>()?;
        self.backend.multi_set(&encoded, ttl).await
    }

    pub async fn del(&self, key: &str) -> Result<(), CacheError> {
        self.backend.del(&self.full_key(key)).await
    }

    /// Records that the store has no value for `key`.
    pub async fn set_cache_with_not_found(&self, key: &str) -> Result<(), CacheError> {
        self.backend
            .set(&self.full_key(key), Self::NOT_FOUND_PLACEHOLDER, self.not_found_ttl)
            .await
    }
}
