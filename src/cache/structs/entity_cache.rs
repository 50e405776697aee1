use std::marker::PhantomData;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::model::traits::entity::Entity;

/// Caches entities of type `E` under `E::CACHE_PREFIX + id`.
pub struct EntityCache<E: Entity> {
    pub(crate) connector: CacheConnector,
    pub(crate) entity: PhantomData<fn() -> E>,
}
