use std::sync::Arc;
use log::info;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::config::structs::cache_config::CacheConfig;
use crate::dao::structs::entity_data_access::EntityDataAccess;
use crate::dao::structs::repositories::Repositories;
use crate::database::traits::relational_store::RelationalStore;
use crate::model::traits::entity::Entity;

impl<S: RelationalStore> Repositories<S> {
    /// `cache` is ignored when the configuration disables caching.
    pub fn new(store: Arc<S>, cache: Option<CacheConnector>, config: &CacheConfig) -> Self {
        let cache = cache.filter(|_| config.enabled);
        match &cache {
            Some(connector) => info!("[DAO] Cache-aside enabled on {}", connector.engine()),
            None => info!("[DAO] Cache disabled, all reads go to the store"),
        }
        Self {
            users: Self::data_access(&store, &cache, config),
            educations: Self::data_access(&store, &cache, config),
            projects: Self::data_access(&store, &cache, config),
            skills: Self::data_access(&store, &cache, config),
            workexperiences: Self::data_access(&store, &cache, config),
            user_introductions: Self::data_access(&store, &cache, config),
        }
    }

    fn data_access<E: Entity>(store: &Arc<S>, cache: &Option<CacheConnector>, config: &CacheConfig) -> EntityDataAccess<E, S> {
        EntityDataAccess::new(store.clone(), cache.clone(), config.ttl_for(E::TABLE))
    }
}
