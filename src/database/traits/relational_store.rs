use async_trait::async_trait;
use crate::model::traits::entity::Entity;
use crate::query::enums::sql_value::SqlValue;
use crate::query::structs::filter::Filter;
use crate::query::structs::page::Page;

/// Transactional SQL store holding every entity table.
///
/// Reads never return soft-deleted rows. Writes report the number of rows
/// they touched. `Tx` is an open transaction owned by the caller; it is
/// finished through `commit` or `rollback`.
#[async_trait]
pub trait RelationalStore: Send + Sync + 'static {
    type Tx: Send;

    async fn find_by_id<E: Entity>(&self, id: u64) -> Result<Option<E>, sqlx::Error>;

    /// Rows that exist, in no particular order; absent ids are simply missing.
    async fn find_by_ids<E: Entity>(&self, ids: &[u64]) -> Result<Vec<E>, sqlx::Error>;

    async fn find_by_condition<E: Entity>(&self, filter: &Filter) -> Result<Option<E>, sqlx::Error>;

    async fn find_page<E: Entity>(&self, filter: &Filter, page: &Page) -> Result<Vec<E>, sqlx::Error>;

    async fn count<E: Entity>(&self, filter: &Filter) -> Result<i64, sqlx::Error>;

    /// Stamps `created_at`/`updated_at` on `entity` and returns the assigned id.
    async fn insert<E: Entity>(&self, entity: &mut E) -> Result<u64, sqlx::Error>;

    /// Writes the given columns and stamps `updated_at`.
    async fn update_partial<E: Entity>(&self, id: u64, values: &[(&'static str, SqlValue)]) -> Result<u64, sqlx::Error>;

    async fn soft_delete<E: Entity>(&self, ids: &[u64]) -> Result<u64, sqlx::Error>;

    async fn begin(&self) -> Result<Self::Tx, sqlx::Error>;

    async fn commit(&self, tx: Self::Tx) -> Result<(), sqlx::Error>;

    async fn rollback(&self, tx: Self::Tx) -> Result<(), sqlx::Error>;

    async fn insert_tx<E: Entity>(&self, tx: &mut Self::Tx, entity: &mut E) -> Result<u64, sqlx::Error>;

    async fn update_partial_tx<E: Entity>(&self, tx: &mut Self::Tx, id: u64, values: &[(&'static str, SqlValue)]) -> Result<u64, sqlx::Error>;

    async fn soft_delete_tx<E: Entity>(&self, tx: &mut Self::Tx, ids: &[u64]) -> Result<u64, sqlx::Error>;
}
