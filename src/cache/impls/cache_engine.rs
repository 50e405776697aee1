use std::fmt;
use crate::cache::enums::cache_engine::CacheEngine;

impl fmt::Display for CacheEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheEngine::redis => write!(f, "redis"),
            CacheEngine::memcache => write!(f, "memcache"),
            CacheEngine::memory => write!(f, "memory"),
        }
    }
}

impl CacheEngine {
    /// Empty for the in-process engine, which has no address.
    pub fn url_scheme(&self) -> &'static str {
        match self {
            CacheEngine::redis => "redis://",
            CacheEngine::memcache => "memcache://",
            CacheEngine::memory => "",
        }
    }

    pub fn is_remote(&self) -> bool {
        !matches!(self, CacheEngine::memory)
    }
}
