//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the configuration
//! from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`, or the path in
//! `WEAVING_NET_CONFIG`) contains:
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **database**: store engine, connection URL and pool size
//! - **cache**: cache engine, address, key namespace and TTLs
//! - **sentry**: error reporting
//!
//! # Example
//!
//! ```rust,ignore
//! use weaving_net::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false)?;
//! let ttl = config.cache.ttl_for("skills");
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
