use crate::model::traits::entity::Entity;
use crate::query::errors::QueryError;
use crate::query::structs::column::Column;
use crate::query::structs::conditions::Conditions;
use crate::query::structs::filter::Filter;

impl Conditions {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// At least one column is required; a single-row lookup without any
    /// predicate would return an arbitrary row.
    pub fn to_filter<E: Entity>(&self) -> Result<Filter, QueryError> {
        if self.columns.is_empty() {
            return Err(QueryError::EmptyConditions);
        }
        Filter::from_columns::<E>(&self.columns)
    }
}
