use std::time::Duration;
use crate::config::structs::cache_config::CacheConfig;

impl CacheConfig {
    pub fn ttl_for(&self, table: &str) -> Duration {
        Duration::from_secs(self.entity_ttl.get(table).copied().unwrap_or(self.ttl))
    }

    pub fn not_found_ttl(&self) -> Duration {
        Duration::from_secs(self.not_found_ttl)
    }
}
