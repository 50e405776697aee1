use clap::ValueEnum;
use serde::{
    Deserialize,
    Serialize
};

/// Relational engine behind the sqlx `Any` pool.
///
/// Picks the SQL dialect the [`QueryBuilder`](crate::database::structs::query_builder::QueryBuilder)
/// renders and the URL schemes a configured `path` may use.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DatabaseDrivers {
    /// `sqlite:` URLs, `?` placeholders.
    sqlite3,
    /// `mysql:` or `mariadb:` URLs, `?` placeholders.
    mysql,
    /// `postgres:` URLs, `$n` placeholders.
    pgsql,
}
