//! Cache enumeration types.

/// Supported cache engines (redis, memcache, memory).
pub mod cache_engine;

/// Outcome of a typed cache lookup.
pub mod cache_lookup;
