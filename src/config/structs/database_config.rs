use serde::{Deserialize, Serialize};
use crate::database::enums::database_drivers::DatabaseDrivers;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    pub engine: DatabaseDrivers,
    /// sqlx connection URL, e.g. `sqlite://data.db?mode=rwc`.
    pub path: String,
    #[serde(default = "DatabaseConfig::default_max_connections")]
    pub max_connections: u32,
}
