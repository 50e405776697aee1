//! Database enumeration types.

/// Supported relational engines (sqlite3, mysql, pgsql).
pub mod database_drivers;
