use sqlx::AnyPool;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::query_builder::QueryBuilder;

#[derive(Debug, Clone)]
pub struct DatabaseConnector {
    pub(crate) pool: AnyPool,
    pub(crate) engine: DatabaseDrivers,
    pub(crate) builder: QueryBuilder,
}
