//! Key-value cache layer supporting Redis, Memcache and an in-process store.
//!
//! The cache sits in front of the relational store and is always advisory:
//! the store is the single source of truth, the cache only remembers what
//! the store answered recently.
//!
//! # Supported Backends
//!
//! - **Redis**: shared remote cache over a multiplexed connection
//! - **Memcache**: alternative remote cache
//! - **Memory**: in-process map with per entry expiry
//!
//! # Architecture
//!
//! - `CacheBackend` trait moves raw string values in and out of a backend
//! - each backend has its own connector implementation
//! - `CacheConnector` adds the key namespace, JSON encoding and the
//!   not-found placeholder on top of any backend
//! - `EntityCache<E>` derives keys from an entity's cache prefix and id
//!
//! # Lookups
//!
//! A lookup yields one of three outcomes, see
//! [`CacheLookup`](enums::cache_lookup::CacheLookup): a hit, a miss, or the
//! not-found placeholder that records a confirmed store miss. Backend
//! failures are reported separately as [`CacheError`](errors::CacheError).
//!
//! # Example
//!
//! ```rust,ignore
//! use weaving_net::cache::structs::cache_connector::CacheConnector;
//! use weaving_net::cache::structs::entity_cache::EntityCache;
//! use weaving_net::model::structs::skills::Skills;
//!
//! let connector = CacheConnector::new(&config.cache).await?;
//! let skills: EntityCache<Skills> = EntityCache::new(connector);
//! skills.set_cache_with_not_found(42).await?;
//! ```

/// Cache engine and lookup outcome enumerations.
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for cache connectors.
pub mod impls;

/// Data structures for cache connections.
pub mod structs;

/// Cache backend trait definitions.
pub mod traits;
