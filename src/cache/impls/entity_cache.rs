use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;
use crate::cache::enums::cache_lookup::CacheLookup;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::cache::structs::entity_cache::EntityCache;
use crate::model::traits::entity::Entity;

impl<E: Entity> Clone for EntityCache<E> {
    fn clone(&self) -> Self {
        Self {
            connector: self.connector.clone(),
            entity: PhantomData,
        }
    }
}

impl<E: Entity> fmt::Debug for EntityCache<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityCache")
            .field("prefix", &E::CACHE_PREFIX)
            .field("connector", &self.connector)
            .finish()
    }
}

impl<E: Entity> EntityCache<E> {
    pub fn new(connector: CacheConnector) -> Self {
        Self {
            connector,
            entity: PhantomData,
        }
    }

    pub fn connector(&self) -> &CacheConnector {
        &self.connector
    }

    pub fn key(id: u64) -> String {
        format!("{}{}", E::CACHE_PREFIX, id)
    }

    pub async fn get(&self, id: u64) -> Result<CacheLookup<E>, CacheError> {
        self.connector.get(&Self::key(id)).await
    }

    /// Hits only; ids that missed or hold the placeholder are absent.
    pub async fn multi_get(&self, ids: &[u64]) -> Result<HashMap<u64, E>, CacheError> {
        let keys: Vec<String> = ids.iter().map(|id| Self::key(*id)).collect();
        let mut found = self.connector.multi_get::<E>(&keys).await?;
        Ok(ids
            .iter()
            .zip(&keys)
            .filter_map(|(id, key)| found.remove(key).map(|entity| (*id, entity)))
            .collect())
    }

    /// Does nothing for a missing entity or the reserved id 0.
    pub async fn set(&self, id: u64, entity: Option<&E>, ttl: Duration) -> Result<(), CacheError> {
        match entity {
            Some(entity) if id != 0 => self.connector.set(&Self::key(id), entity, ttl).await,
            _ => Ok(()),
        }
    }

    pub async fn multi_set(&self, entities: &HashMap<u64, E>, ttl: Duration) -> Result<(), CacheError> {
        let entries: Vec<(String, &E)> = entities
            .iter()
            .filter(|(id, _)| **id != 0)
            .map(|(id, entity)| (Self::key(*id), entity))
            .collect();
        self.connector.multi_set(&entries, ttl).await
    }

    pub async fn del(&self, id: u64) -> Result<(), CacheError> {
        self.connector.del(&Self::key(id)).await
    }

    pub async fn set_cache_with_not_found(&self, id: u64) -> Result<(), CacheError> {
        self.connector.set_cache_with_not_found(&Self::key(id)).await
    }
}
