//! Database connector structures.

/// sqlx pool wrapper implementing the relational store.
pub mod database_connector;

/// Engine aware SQL generation.
pub mod query_builder;

/// Rendered SQL with its bind values.
pub mod sql_statement;
