use crate::database::enums::database_drivers::DatabaseDrivers;

/// Renders entity statements in the dialect of one engine.
///
/// Only identifiers declared by an entity reach the SQL text; every value
/// travels as a bound parameter.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    pub engine: DatabaseDrivers,
}
