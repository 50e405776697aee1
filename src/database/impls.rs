pub mod database_connector;
pub mod database_drivers;
pub mod query_builder;
