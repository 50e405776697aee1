use async_trait::async_trait;
use log::{debug, info};
use sqlx::any::AnyPoolOptions;
use sqlx::{Any, AnyConnection, Transaction};
use crate::common::common::current_time;
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::query_builder::QueryBuilder;
use crate::database::structs::sql_statement::SqlStatement;
use crate::database::traits::relational_store::RelationalStore;
use crate::model::traits::entity::Entity;
use crate::query::enums::sql_value::SqlValue;
use crate::query::structs::filter::Filter;
use crate::query::structs::page::Page;

macro_rules! bind_values {
    ($query:expr, $values:expr) => {{
        let mut query = $query;
        for value in $values {
            query = match value {
                SqlValue::Int(value) => query.bind(value),
                SqlValue::Text(value) => query.bind(value),
            };
        }
        query
    }};
}

impl DatabaseConnector {
    const MYSQL_LAST_INSERT_ID: &'static str = "SELECT CAST(LAST_INSERT_ID() AS SIGNED)";

    #[tracing::instrument(level = "debug")]
    pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnector, sqlx::Error> {
        sqlx::any::install_default_drivers();
        let builder = QueryBuilder::new(config.engine);
        if !config.engine.accepts_url(&config.path) {
            return Err(sqlx::Error::Configuration(
                format!("{} cannot open '{}'", builder.engine_name(), config.path).into(),
            ));
        }
        let mut options = AnyPoolOptions::new().max_connections(config.max_connections.max(1));
        if config.path.contains(":memory:") {
            options = options.idle_timeout(None).max_lifetime(None);
        }
        let pool = options.connect(&config.path).await?;
        info!("[{}] Connected to {}", builder.engine_name(), config.engine);
        Ok(DatabaseConnector {
            pool,
            engine: config.engine,
            builder,
        })
    }

    pub fn engine(&self) -> DatabaseDrivers {
        self.engine
    }

    pub fn builder(&self) -> &QueryBuilder {
        &self.builder
    }

    fn log_prefix(&self) -> String {
        format!("[{}]", self.builder.engine_name())
    }

    /// Creates the table of `E` and its soft-delete index when missing.
    pub async fn create_table<E: Entity>(&self) -> Result<(), sqlx::Error> {
        info!("[BOOT] Creating table {} on {}", E::TABLE, self.builder.engine_name());
        sqlx::query(&self.builder.create_table::<E>()).execute(&self.pool).await?;
        if let Some(index) = self.builder.create_deleted_at_index::<E>() {
            sqlx::query(&index).execute(&self.pool).await?;
        }
        Ok(())
    }

    async fn fetch_optional<E: Entity>(&self, statement: SqlStatement) -> Result<Option<E>, sqlx::Error> {
        debug!("{} {}", self.log_prefix(), statement.sql);
        bind_values!(sqlx::query_as::<Any, E>(&statement.sql), statement.values)
            .fetch_optional(&self.pool)
            .await
    }

    async fn fetch_all<E: Entity>(&self, statement: SqlStatement) -> Result<Vec<E>, sqlx::Error> {
        debug!("{} {}", self.log_prefix(), statement.sql);
        bind_values!(sqlx::query_as::<Any, E>(&statement.sql), statement.values)
            .fetch_all(&self.pool)
            .await
    }

    async fn execute_on(&self, connection: &mut AnyConnection, statement: SqlStatement) -> Result<u64, sqlx::Error> {
        debug!("{} {}", self.log_prefix(), statement.sql);
        let result = bind_values!(sqlx::query::<Any>(&statement.sql), statement.values)
            .execute(connection)
            .await?;
        Ok(result.rows_affected())
    }

    async fn insert_on<E: Entity>(&self, connection: &mut AnyConnection, entity: &mut E) -> Result<u64, sqlx::Error> {
        let now = current_time();
        let base = entity.base_mut();
        base.created_at = now;
        base.updated_at = now;
        let statement = self.builder.insert(&*entity);
        debug!("{} {}", self.log_prefix(), statement.sql);
        let id = match self.engine {
            DatabaseDrivers::sqlite3 | DatabaseDrivers::pgsql => {
                bind_values!(sqlx::query_scalar::<Any, i64>(&statement.sql), statement.values)
                    .fetch_one(&mut *connection)
                    .await?
            }
            DatabaseDrivers::mysql => {
                bind_values!(sqlx::query::<Any>(&statement.sql), statement.values)
                    .execute(&mut *connection)
                    .await?;
                sqlx::query_scalar::<Any, i64>(Self::MYSQL_LAST_INSERT_ID)
                    .fetch_one(&mut *connection)
                    .await?
            }
        };
        u64::try_from(id).map_err(|e| sqlx::Error::Decode(Box::new(e)))
    }

    async fn update_partial_on<E: Entity>(&self, connection: &mut AnyConnection, id: u64, values: &[(&'static str, SqlValue)]) -> Result<u64, sqlx::Error> {
        let statement = self.builder.update_partial::<E>(id, values, current_time());
        self.execute_on(connection, statement).await
    }

    async fn soft_delete_on<E: Entity>(&self, connection: &mut AnyConnection, ids: &[u64]) -> Result<u64, sqlx::Error> {
        if ids.is_empty() {
            return Ok(0);
        }
        let statement = self.builder.soft_delete::<E>(ids, current_time());
        self.execute_on(connection, statement).await
    }
}

#[async_trait]
impl RelationalStore for DatabaseConnector {
    type Tx = Transaction<'static, Any>;

    async fn find_by_id<E: Entity>(&self, id: u64) -> Result<Option<E>, sqlx::Error> {
        self.fetch_optional(self.builder.select_by_id::<E>(id)).await
    }

    async fn find_by_ids<E: Entity>(&self, ids: &[u64]) -> Result<Vec<E>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch_all(self.builder.select_by_ids::<E>(ids)).await
    }

    async fn find_by_condition<E: Entity>(&self, filter: &Filter) -> Result<Option<E>, sqlx::Error> {
        self.fetch_optional(self.builder.select_one::<E>(filter)).await
    }

    async fn find_page<E: Entity>(&self, filter: &Filter, page: &Page) -> Result<Vec<E>, sqlx::Error> {
        self.fetch_all(self.builder.select_page::<E>(filter, page)).await
    }

    async fn count<E: Entity>(&self, filter: &Filter) -> Result<i64, sqlx::Error> {
        let statement = self.builder.count::<E>(filter);
        debug!("{} {}", self.log_prefix(), statement.sql);
        bind_values!(sqlx::query_scalar::<Any, i64>(&statement.sql), statement.values)
            .fetch_one(&self.pool)
            .await
    }

    async fn insert<E: Entity>(&self, entity: &mut E) -> Result<u64, sqlx::Error> {
        let mut connection = self.pool.acquire().await?;
        self.insert_on(&mut connection, entity).await
    }

    async fn update_partial<E: Entity>(&self, id: u64, values: &[(&'static str, SqlValue)]) -> Result<u64, sqlx::Error> {
        let mut connection = self.pool.acquire().await?;
        self.update_partial_on::<E>(&mut connection, id, values).await
    }

    async fn soft_delete<E: Entity>(&self, ids: &[u64]) -> Result<u64, sqlx::Error> {
        let mut connection = self.pool.acquire().await?;
        self.soft_delete_on::<E>(&mut connection, ids).await
    }

    async fn begin(&self) -> Result<Self::Tx, sqlx::Error> {
        self.pool.begin().await
    }

    async fn commit(&self, tx: Self::Tx) -> Result<(), sqlx::Error> {
        tx.commit().await
    }

    async fn rollback(&self, tx: Self::Tx) -> Result<(), sqlx::Error> {
        tx.rollback().await
    }

    async fn insert_tx<E: Entity>(&self, tx: &mut Self::Tx, entity: &mut E) -> Result<u64, sqlx::Error> {
        self.insert_on(&mut **tx, entity).await
    }

    async fn update_partial_tx<E: Entity>(&self, tx: &mut Self::Tx, id: u64, values: &[(&'static str, SqlValue)]) -> Result<u64, sqlx::Error> {
        self.update_partial_on::<E>(&mut **tx, id, values).await
    }

    async fn soft_delete_tx<E: Entity>(&self, tx: &mut Self::Tx, ids: &[u64]) -> Result<u64, sqlx::Error> {
        self.soft_delete_on::<E>(&mut **tx, ids).await
    }
}
