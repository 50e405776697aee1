use crate::model::traits::entity::Entity;
use crate::query::errors::QueryError;
use crate::query::structs::filter::Filter;
use crate::query::structs::page::Page;
use crate::query::structs::params::Params;

impl Params {
    pub fn new(page: u64, limit: u64, sort: &str) -> Self {
        Self {
            page,
            limit,
            sort: sort.to_string(),
            columns: Vec::new(),
        }
    }

    pub fn to_filter<E: Entity>(&self) -> Result<Filter, QueryError> {
        Filter::from_columns::<E>(&self.columns)
    }

    pub fn to_page<E: Entity>(&self) -> Result<Page, QueryError> {
        Page::new::<E>(self.page, self.limit, &self.sort)
    }
}
