use std::fmt::Debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::FromRow;
use sqlx::any::AnyRow;
use crate::model::structs::field::Field;
use crate::model::structs::model_base::ModelBase;
use crate::query::enums::sql_value::SqlValue;

/// A domain record the data access layer can store, query and cache.
///
/// `FIELDS` lists the entity specific columns only; the columns of
/// [`ModelBase`] are implied. `values()` must return one value per entry of
/// `FIELDS`, in the same order.
pub trait Entity:
    Serialize + DeserializeOwned + for<'r> FromRow<'r, AnyRow> + Debug + Clone + Send + Sync + Unpin + 'static
{
    const TABLE: &'static str;

    /// Lowercase, always ends with `:`.
    const CACHE_PREFIX: &'static str;

    const FIELDS: &'static [Field];

    fn base(&self) -> &ModelBase;

    fn base_mut(&mut self) -> &mut ModelBase;

    fn values(&self) -> Vec<SqlValue>;

    fn id(&self) -> u64 {
        self.base().id
    }

    /// Columns written by a partial update. A field holding its zero value
    /// (`0` or `""`) counts as not supplied and is skipped, so a field can
    /// never be cleared through this path.
    fn update_values(&self) -> Vec<(&'static str, SqlValue)> {
        Self::FIELDS
            .iter()
            .zip(self.values())
            .filter(|(_, value)| !value.is_zero())
            .map(|(field, value)| (field.name, value))
            .collect()
    }

    /// Looks up a base or entity column by name.
    fn field(name: &str) -> Option<&'static Field> {
        ModelBase::FIELDS
            .iter()
            .chain(Self::FIELDS.iter())
            .find(|field| field.name == name)
    }
}
