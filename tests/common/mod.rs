#![allow(dead_code)]
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use mockall::mock;
use weaving_net::cache::enums::cache_engine::CacheEngine;
use weaving_net::cache::errors::CacheError;
use weaving_net::cache::structs::cache_connector::CacheConnector;
use weaving_net::cache::structs::cache_connector_memory::CacheConnectorMemory;
use weaving_net::cache::traits::cache_backend::CacheBackend;
use weaving_net::config::structs::database_config::DatabaseConfig;
use weaving_net::dao::structs::entity_data_access::EntityDataAccess;
use weaving_net::database::enums::database_drivers::DatabaseDrivers;
use weaving_net::database::structs::database_connector::DatabaseConnector;
use weaving_net::database::traits::relational_store::RelationalStore;
use weaving_net::model::structs::educations::Educations;
use weaving_net::model::structs::model_base::ModelBase;
use weaving_net::model::structs::projects::Projects;
use weaving_net::model::structs::skills::Skills;
use weaving_net::model::structs::user_introductions::UserIntroductions;
use weaving_net::model::structs::users::Users;
use weaving_net::model::structs::workexperiences::Workexperiences;
use weaving_net::model::traits::entity::Entity;
use weaving_net::query::enums::sql_value::SqlValue;
use weaving_net::query::structs::filter::Filter;
use weaving_net::query::structs::page::Page;

pub const TEST_PREFIX: &str = "test:";

/// Single connection so every query sees the same in-memory database.
pub fn sqlite_memory_config() -> DatabaseConfig {
    DatabaseConfig {
        engine: DatabaseDrivers::sqlite3,
        path: "sqlite::memory:".to_string(),
        max_connections: 1,
    }
}

pub async fn create_test_store() -> DatabaseConnector {
    let store = DatabaseConnector::connect(&sqlite_memory_config()).await.unwrap();
    store.create_table::<Users>().await.unwrap();
    store.create_table::<Educations>().await.unwrap();
    store.create_table::<Projects>().await.unwrap();
    store.create_table::<Skills>().await.unwrap();
    store.create_table::<Workexperiences>().await.unwrap();
    store.create_table::<UserIntroductions>().await.unwrap();
    store
}

pub fn create_memory_cache() -> (CacheConnector, CacheConnectorMemory) {
    let memory = CacheConnectorMemory::new();
    let connector = CacheConnector::memory(memory.clone(), TEST_PREFIX, CacheConnector::DEFAULT_NOT_FOUND_TTL);
    (connector, memory)
}

pub fn test_skill(user_id: i64, name: &str) -> Skills {
    Skills {
        base: ModelBase::default(),
        user_id,
        skill_type: "language".to_string(),
        skill_name: name.to_string(),
        proficiency_level: "expert".to_string(),
    }
}

pub fn test_project(user_id: i64, name: &str) -> Projects {
    Projects {
        base: ModelBase::default(),
        user_id,
        project_name: name.to_string(),
        role: "maintainer".to_string(),
        description: format!("{} description", name),
    }
}

/// Store decorator counting the reads that reach the database.
pub struct CountingStore {
    pub inner: DatabaseConnector,
    pub delay: Option<Duration>,
    pub find_by_id_calls: AtomicUsize,
    pub find_by_ids_calls: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: DatabaseConnector, delay: Option<Duration>) -> Self {
        Self {
            inner,
            delay,
            find_by_id_calls: AtomicUsize::new(0),
            find_by_ids_calls: AtomicUsize::new(0),
        }
    }

    pub fn single_reads(&self) -> usize {
        self.find_by_id_calls.load(Ordering::SeqCst)
    }

    pub fn batch_reads(&self) -> usize {
        self.find_by_ids_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl RelationalStore for CountingStore {
    type Tx = <DatabaseConnector as RelationalStore>::Tx;

    async fn find_by_id<E: Entity>(&self, id: u64) -> Result<Option<E>, sqlx::Error> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.inner.find_by_id::<E>(id).await
    }

    async fn find_by_ids<E: Entity>(&self, ids: &[u64]) -> Result<Vec<E>, sqlx::Error> {
        self.find_by_ids_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.inner.find_by_ids::<E>(ids).await
    }

    async fn find_by_condition<E: Entity>(&self, filter: &Filter) -> Result<Option<E>, sqlx::Error> {
        self.inner.find_by_condition::<E>(filter).await
    }

    async fn find_page<E: Entity>(&self, filter: &Filter, page: &Page) -> Result<Vec<E>, sqlx::Error> {
        self.inner.find_page::<E>(filter, page).await
    }

    async fn count<E: Entity>(&self, filter: &Filter) -> Result<i64, sqlx::Error> {
        self.inner.count::<E>(filter).await
    }

    async fn insert<E: Entity>(&self, entity: &mut E) -> Result<u64, sqlx::Error> {
        self.inner.insert(entity).await
    }

    async fn update_partial<E: Entity>(&self, id: u64, values: &[(&'static str, SqlValue)]) -> Result<u64, sqlx::Error> {
        self.inner.update_partial::<E>(id, values).await
    }

    async fn soft_delete<E: Entity>(&self, ids: &[u64]) -> Result<u64, sqlx::Error> {
        self.inner.soft_delete::<E>(ids).await
    }

    async fn begin(&self) -> Result<Self::Tx, sqlx::Error> {
        self.inner.begin().await
    }

    async fn commit(&self, tx: Self::Tx) -> Result<(), sqlx::Error> {
        self.inner.commit(tx).await
    }

    async fn rollback(&self, tx: Self::Tx) -> Result<(), sqlx::Error> {
        self.inner.rollback(tx).await
    }

    async fn insert_tx<E: Entity>(&self, tx: &mut Self::Tx, entity: &mut E) -> Result<u64, sqlx::Error> {
        self.inner.insert_tx(tx, entity).await
    }

    async fn update_partial_tx<E: Entity>(&self, tx: &mut Self::Tx, id: u64, values: &[(&'static str, SqlValue)]) -> Result<u64, sqlx::Error> {
        self.inner.update_partial_tx::<E>(tx, id, values).await
    }

    async fn soft_delete_tx<E: Entity>(&self, tx: &mut Self::Tx, ids: &[u64]) -> Result<u64, sqlx::Error> {
        self.inner.soft_delete_tx::<E>(tx, ids).await
    }
}

pub async fn create_counting_access<E: Entity>(delay: Option<Duration>) -> (EntityDataAccess<E, CountingStore>, Arc<CountingStore>, CacheConnectorMemory) {
    let store = Arc::new(CountingStore::new(create_test_store().await, delay));
    let (cache, memory) = create_memory_cache();
    let access = EntityDataAccess::new(store.clone(), Some(cache), EntityDataAccess::<E, CountingStore>::DEFAULT_EXPIRE_TIME);
    (access, store, memory)
}

mock! {
    pub Backend {}

    #[async_trait]
    impl CacheBackend for Backend {
        async fn ping(&self) -> Result<(), CacheError>;
        async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
        async fn multi_get(&self, keys: &[String]) -> Result<HashMap<String, String>, CacheError>;
        async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
        async fn multi_set(&self, entries: &[(String, String)], ttl: Duration) -> Result<(), CacheError>;
        async fn del(&self, key: &str) -> Result<(), CacheError>;
    }
}

/// A cache whose every call fails as if the server were down.
pub fn create_failing_cache() -> CacheConnector {
    let mut backend = MockBackend::new();
    backend.expect_ping().returning(|| Err(CacheError::ConnectionError("refused".to_string())));
    backend.expect_get().returning(|_| Err(CacheError::ConnectionError("refused".to_string())));
    backend.expect_multi_get().returning(|_| Err(CacheError::ConnectionError("refused".to_string())));
    backend.expect_set().returning(|_, _, _| Err(CacheError::ConnectionError("refused".to_string())));
    backend.expect_multi_set().returning(|_, _| Err(CacheError::ConnectionError("refused".to_string())));
    backend.expect_del().returning(|_| Err(CacheError::ConnectionError("refused".to_string())));
    CacheConnector::from_backend(Arc::new(backend), CacheEngine::redis, TEST_PREFIX, CacheConnector::DEFAULT_NOT_FOUND_TTL)
}
