//! Query conditions and paging parameters.
//!
//! Callers describe lookups with loosely typed [`Conditions`](structs::conditions::Conditions)
//! and [`Params`](structs::params::Params) (column name, expression, value,
//! logic). Before anything reaches the store they are validated against the
//! entity's declared columns and turned into a typed
//! [`Filter`](structs::filter::Filter) and [`Page`](structs::page::Page); an
//! unknown column, expression or logic never makes it into SQL.
//!
//! # Expressions
//!
//! `=`/`eq` (default), `!=`/`neq`, `>`/`gt`, `>=`/`gte`, `<`/`lt`,
//! `<=`/`lte`, `like` (value wrapped in `%`), `in` (comma separated values).
//!
//! # Logic
//!
//! `and`/`&` (default) or `or`/`||`, joining a column to the next one.

/// Expression, logic and value enumerations.
pub mod enums;

/// Validation errors.
pub mod errors;

/// Condition, parameter, filter and page structures.
pub mod structs;

/// Implementation blocks for parsing and validation.
pub mod impls;
