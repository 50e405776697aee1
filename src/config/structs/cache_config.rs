use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::cache::enums::cache_engine::CacheEngine;

/// TTLs are in seconds. `entity_ttl` overrides `ttl` per table name.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheConfig {
    pub enabled: bool,
    pub engine: CacheEngine,
    pub address: String,
    #[serde(default)]
    pub prefix: String,
    pub ttl: u64,
    pub not_found_ttl: u64,
    #[serde(default)]
    pub entity_ttl: BTreeMap<String, u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            engine: CacheEngine::memory,
            address: "127.0.0.1:6379".to_string(),
            prefix: String::new(),
            ttl: 300,
            not_found_ttl: 600,
            entity_ttl: BTreeMap::new(),
        }
    }
}
