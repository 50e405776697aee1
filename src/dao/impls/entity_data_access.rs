use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use log::{debug, warn};
use crate::cache::enums::cache_lookup::CacheLookup;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::cache::structs::entity_cache::EntityCache;
use crate::common::structs::request_context::RequestContext;
use crate::dao::errors::DataAccessError;
use crate::dao::structs::entity_data_access::EntityDataAccess;
use crate::dao::structs::flight_group::FlightGroup;
use crate::database::traits::relational_store::RelationalStore;
use crate::model::structs::model_base::ModelBase;
use crate::model::traits::entity::Entity;
use crate::query::enums::expression::Expression;
use crate::query::enums::sql_value::SqlValue;
use crate::query::structs::conditions::Conditions;
use crate::query::structs::filter::{Filter, Predicate};
use crate::query::structs::page::Page;
use crate::query::structs::params::Params;

impl<E: Entity, S: RelationalStore> Clone for EntityDataAccess<E, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            cache: self.cache.clone(),
            flight: self.flight.clone(),
            expire_time: self.expire_time,
        }
    }
}

impl<E: Entity, S: RelationalStore> fmt::Debug for EntityDataAccess<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityDataAccess")
            .field("table", &E::TABLE)
            .field("cache", &self.cache)
            .field("flight", &self.flight)
            .field("expire_time", &self.expire_time)
            .finish()
    }
}

impl<E: Entity, S: RelationalStore> EntityDataAccess<E, S> {
    pub const DEFAULT_EXPIRE_TIME: Duration = Duration::from_secs(300);
    pub const MAX_ID: u64 = i64::MAX as u64;

    /// `None` for `cache` runs every operation against the store only.
    pub fn new(store: Arc<S>, cache: Option<CacheConnector>, expire_time: Duration) -> Self {
        Self {
            store,
            cache: cache.map(EntityCache::new),
            flight: FlightGroup::new(),
            expire_time,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn cache(&self) -> Option<&EntityCache<E>> {
        self.cache.as_ref()
    }

    pub fn expire_time(&self) -> Duration {
        self.expire_time
    }

    /// Ids the store can hold: non-zero and within the signed 64-bit column.
    fn is_valid_id(id: u64) -> bool {
        id != 0 && id <= Self::MAX_ID
    }

    fn require_id(id: u64) -> Result<(), DataAccessError> {
        if id == 0 {
            return Err(DataAccessError::InvalidArgument(format!("{}: id cannot be 0", E::TABLE)));
        }
        if id > Self::MAX_ID {
            return Err(DataAccessError::InvalidArgument(format!("{}: id {} is out of range", E::TABLE, id)));
        }
        Ok(())
    }

    fn require_ids(ids: &[u64]) -> Result<(), DataAccessError> {
        if ids.is_empty() {
            return Err(DataAccessError::InvalidArgument(format!("{}: ids cannot be empty", E::TABLE)));
        }
        ids.iter().try_for_each(|id| Self::require_id(*id))
    }

    /// Drops cached copies after a write. Failures only get logged; the
    /// entry expires on its own at worst.
    async fn invalidate(&self, ctx: &RequestContext, ids: &[u64]) {
        let Some(cache) = &self.cache else {
            return;
        };
        for id in ids {
            if let Err(error) = ctx.run(cache.del(*id)).await {
                warn!("[DAO] Failed to invalidate {}: {}", EntityCache::<E>::key(*id), error);
            }
        }
    }

    /// Inserts `entity` and writes the assigned id back into it.
    pub async fn create(&self, ctx: &RequestContext, entity: &mut E) -> Result<u64, DataAccessError> {
        let id = ctx.run(self.store.insert(entity)).await?;
        entity.base_mut().id = id;
        debug!("[DAO] Created {} id={}", E::TABLE, id);
        Ok(id)
    }

    /// Writes the non-zero fields of `entity`; zero values are left untouched.
    pub async fn update_by_id(&self, ctx: &RequestContext, entity: &E) -> Result<(), DataAccessError> {
        let id = entity.id();
        Self::require_id(id)?;
        let values = entity.update_values();
        let result = ctx.run(self.store.update_partial::<E>(id, &values)).await;
        self.invalidate(ctx, &[id]).await;
        result.map(|_| ())
    }

    pub async fn delete_by_id(&self, ctx: &RequestContext, id: u64) -> Result<(), DataAccessError> {
        self.delete_by_ids(ctx, &[id]).await
    }

    pub async fn delete_by_ids(&self, ctx: &RequestContext, ids: &[u64]) -> Result<(), DataAccessError> {
        Self::require_ids(ids)?;
        let result = ctx.run(self.store.soft_delete::<E>(ids)).await;
        self.invalidate(ctx, ids).await;
        result.map(|_| ())
    }

    /// Concurrent misses on the same id share one store lookup, which runs
    /// under the first caller's context: its deadline or cancellation fails
    /// every caller waiting on that lookup.
    pub async fn get_by_id(&self, ctx: &RequestContext, id: u64) -> Result<E, DataAccessError> {
        Self::require_id(id)?;
        let Some(cache) = &self.cache else {
            return ctx
                .run(self.store.find_by_id::<E>(id))
                .await?
                .ok_or(DataAccessError::RecordNotFound);
        };
        match ctx.run(cache.get(id)).await? {
            CacheLookup::Hit(entity) => return Ok(entity),
            CacheLookup::Placeholder => return Err(DataAccessError::RecordNotFound),
            CacheLookup::Miss => {}
        }
        let store = self.store.clone();
        let cache = cache.clone();
        let leader = ctx.clone();
        let expire_time = self.expire_time;
        let key = id.to_string();
        let flight = self.flight.work(&key, move || async move {
            match leader.run(store.find_by_id::<E>(id)).await? {
                Some(entity) => {
                    leader.run(cache.set(id, Some(&entity), expire_time)).await?;
                    Ok(entity)
                }
                None => {
                    leader.run(cache.set_cache_with_not_found(id)).await?;
                    Err(DataAccessError::RecordNotFound)
                }
            }
        });
        ctx.run(flight).await
    }

    /// Returns the rows that exist, keyed by id. Zero, out of range and
    /// repeated ids are ignored; missing ids are simply absent from the map.
    pub async fn get_by_ids(&self, ctx: &RequestContext, ids: &[u64]) -> Result<HashMap<u64, E>, DataAccessError> {
        let mut seen = HashSet::with_capacity(ids.len());
        let ids: Vec<u64> = ids.iter().copied().filter(|id| Self::is_valid_id(*id) && seen.insert(*id)).collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let Some(cache) = &self.cache else {
            let records = ctx.run(self.store.find_by_ids::<E>(&ids)).await?;
            return Ok(records.into_iter().map(|entity| (entity.id(), entity)).collect());
        };

        let mut found = ctx.run(cache.multi_get(&ids)).await?;
        let unresolved: Vec<u64> = ids.iter().copied().filter(|id| !found.contains_key(id)).collect();
        let mut misses = Vec::new();
        for id in unresolved {
            match ctx.run(cache.get(id)).await? {
                CacheLookup::Hit(entity) => {
                    found.insert(id, entity);
                }
                CacheLookup::Placeholder => {}
                CacheLookup::Miss => misses.push(id),
            }
        }
        if misses.is_empty() {
            return Ok(found);
        }

        let loaded: HashMap<u64, E> = ctx
            .run(self.store.find_by_ids::<E>(&misses))
            .await?
            .into_iter()
            .map(|entity| (entity.id(), entity))
            .collect();
        if !loaded.is_empty() {
            ctx.run(cache.multi_set(&loaded, self.expire_time)).await?;
        }
        for id in misses.iter().filter(|id| !loaded.contains_key(id)) {
            ctx.run(cache.set_cache_with_not_found(*id)).await?;
        }
        debug!(
            "[DAO] {} batch: {} cached, {} loaded, {} absent",
            E::TABLE,
            found.len(),
            loaded.len(),
            misses.len() - loaded.len()
        );
        found.extend(loaded);
        Ok(found)
    }

    /// Single row lookup by column conditions, never cached.
    pub async fn get_by_condition(&self, ctx: &RequestContext, conditions: &Conditions) -> Result<E, DataAccessError> {
        let filter = conditions.to_filter::<E>()?;
        ctx.run(self.store.find_by_condition::<E>(&filter))
            .await?
            .ok_or(DataAccessError::RecordNotFound)
    }

    /// Rows with an id below `last_id`, for cursor paging.
    pub async fn get_by_last_id(&self, ctx: &RequestContext, last_id: u64, limit: u64, sort: &str) -> Result<Vec<E>, DataAccessError> {
        let page = Page::new::<E>(0, limit, sort)?;
        let filter = Filter::new(vec![Predicate::new(ModelBase::ID, Expression::Lt, SqlValue::from_id(last_id))]);
        ctx.run(self.store.find_page::<E>(&filter, &page)).await
    }

    /// Offset paging. The total is 0 when the sort asks to ignore the count.
    pub async fn get_by_columns(&self, ctx: &RequestContext, params: &Params) -> Result<(Vec<E>, i64), DataAccessError> {
        let filter = params.to_filter::<E>()?;
        let page = params.to_page::<E>()?;
        let mut total = 0;
        if page.count {
            total = ctx.run(self.store.count::<E>(&filter)).await?;
            if total == 0 {
                return Ok((Vec::new(), 0));
            }
        }
        let records = ctx.run(self.store.find_page::<E>(&filter, &page)).await?;
        Ok((records, total))
    }

    pub async fn create_by_tx(&self, ctx: &RequestContext, tx: &mut S::Tx, entity: &mut E) -> Result<u64, DataAccessError> {
        let id = ctx.run(self.store.insert_tx(tx, entity)).await?;
        entity.base_mut().id = id;
        Ok(id)
    }

    /// The cache entry is dropped right away, before the transaction ends.
    pub async fn update_by_tx(&self, ctx: &RequestContext, tx: &mut S::Tx, entity: &E) -> Result<(), DataAccessError> {
        let id = entity.id();
        Self::require_id(id)?;
        let values = entity.update_values();
        let result = ctx.run(self.store.update_partial_tx::<E>(tx, id, &values)).await;
        self.invalidate(ctx, &[id]).await;
        result.map(|_| ())
    }

    pub async fn delete_by_tx(&self, ctx: &RequestContext, tx: &mut S::Tx, id: u64) -> Result<(), DataAccessError> {
        Self::require_id(id)?;
        let result = ctx.run(self.store.soft_delete_tx::<E>(tx, &[id])).await;
        self.invalidate(ctx, &[id]).await;
        result.map(|_| ())
    }
}
