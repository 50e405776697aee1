//! Relational store backed by sqlx.
//!
//! The store is the single source of truth for every entity. It is reached
//! through the [`RelationalStore`](traits::relational_store::RelationalStore)
//! trait; [`DatabaseConnector`](structs::database_connector::DatabaseConnector)
//! implements it on an sqlx `AnyPool`, so one binary talks to SQLite, MySQL or
//! PostgreSQL depending on configuration.
//!
//! # Conventions
//!
//! - every table has `id`, `created_at`, `updated_at` and `deleted_at`
//! - timestamps are unix seconds
//! - rows with `deleted_at` set are invisible to every read
//! - deletes only stamp `deleted_at`
//!
//! Engine differences (identifier quoting, placeholders, column types,
//! `LIMIT` syntax, insert id retrieval) are confined to
//! [`QueryBuilder`](structs::query_builder::QueryBuilder).

/// Database driver enumeration (sqlite3, mysql, pgsql).
pub mod enums;

/// Implementation blocks for the connector and query builder.
pub mod impls;

/// Connector, query builder and statement structures.
pub mod structs;

/// The relational store contract.
pub mod traits;
