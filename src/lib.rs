//! # weaving-net
//!
//! Cache-aside data access for the weaving-net profile backend.
//!
//! ## Overview
//!
//! The backend stores six kinds of profile records (users, educations,
//! projects, skills, work experiences and introductions) in a relational
//! database and keeps recently read records in a key-value cache. This crate
//! is the layer between the two: one generic data access component per
//! entity that reads through the cache, remembers confirmed misses,
//! collapses concurrent lookups of the same id into a single query and
//! drops cached copies whenever a record is written.
//!
//! ## Features
//!
//! - **Stores**: SQLite, MySQL and PostgreSQL through sqlx
//! - **Caches**: Redis, Memcache or an in-process map, or no cache at all
//! - **Negative caching**: a placeholder records ids the store does not have
//! - **Request coalescing**: one store query per missing id, however many callers
//! - **Deadlines**: every cache and store call honours the caller's context
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use weaving_net::cache::structs::cache_connector::CacheConnector;
//! use weaving_net::common::structs::request_context::RequestContext;
//! use weaving_net::config::structs::configuration::Configuration;
//! use weaving_net::dao::structs::repositories::Repositories;
//! use weaving_net::database::structs::database_connector::DatabaseConnector;
//!
//! let config = Configuration::load_from_file(false)?;
//! let store = Arc::new(DatabaseConnector::connect(&config.database).await?);
//! let cache = CacheConnector::new(&config.cache).await?;
//! let repositories = Repositories::new(store, Some(cache), &config.cache);
//!
//! let ctx = RequestContext::background();
//! let skill = repositories.skills.get_by_id(&ctx, 1).await?;
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Redis, Memcache and in-process cache backends
//! - [`common`] - Logging, request context and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`dao`] - Cache-aside data access and request coalescing
//! - [`database`] - Relational store over sqlx
//! - [`model`] - Domain entities
//! - [`query`] - Column conditions and paging parameters
//! - [`structs`] - CLI argument parsing
//! - [`utils`] - Sentry tracing helpers

/// Key-value cache layer supporting Redis, Memcache and an in-process map.
pub mod cache;

/// Common utilities and shared functionality.
///
/// Contains logging setup, the boot error type and the per call request
/// context carrying deadlines and cancellation.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Cache-aside data access module.
///
/// One generic component per entity coordinates the cache and the store,
/// coalescing concurrent lookups of the same id.
pub mod dao;

/// Relational store module with multi-database support.
///
/// Provides a unified interface for SQLite, MySQL, and PostgreSQL backends
/// through an sqlx `Any` pool and an engine aware query builder.
pub mod database;

/// Domain entity module.
pub mod model;

/// Query conditions and paging parameters.
pub mod query;

/// CLI argument parsing.
pub mod structs;

/// Sentry tracing helpers.
pub mod utils;
