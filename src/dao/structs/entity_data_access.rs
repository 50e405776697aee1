use std::sync::Arc;
use std::time::Duration;
use crate::cache::structs::entity_cache::EntityCache;
use crate::dao::structs::flight_group::FlightGroup;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::traits::relational_store::RelationalStore;
use crate::model::traits::entity::Entity;

/// Coordinates the cache and the store for entities of type `E`.
///
/// Without a cache every call goes straight to the store. Clones share the
/// store handle, the cache and the in-flight lookups.
pub struct EntityDataAccess<E: Entity, S: RelationalStore = DatabaseConnector> {
    pub(crate) store: Arc<S>,
    pub(crate) cache: Option<EntityCache<E>>,
    pub(crate) flight: FlightGroup<E>,
    pub(crate) expire_time: Duration,
}
