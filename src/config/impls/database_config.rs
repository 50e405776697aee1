use crate::config::structs::database_config::DatabaseConfig;

impl DatabaseConfig {
    pub fn default_max_connections() -> u32 {
        10
    }
}
