//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Cache backend configuration (Redis/Memcache/memory).
pub mod cache_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Database connection configuration.
pub mod database_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
