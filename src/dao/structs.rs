/// Cache-aside coordinator for one entity type.
pub mod entity_data_access;

/// Collapses concurrent lookups of the same key.
pub mod flight_group;

/// One data access component per entity.
pub mod repositories;
