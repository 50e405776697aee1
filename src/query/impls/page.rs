use crate::model::traits::entity::Entity;
use crate::query::errors::QueryError;
use crate::query::structs::page::{Page, SortColumn};

impl Page {
    pub const DEFAULT_LIMIT: u64 = 20;
    pub const MAX_LIMIT: u64 = 1000;
    pub const DEFAULT_SORT: &'static str = "-id";
    pub const IGNORE_COUNT: &'static str = "ignore count";

    pub fn new<E: Entity>(page: u64, limit: u64, sort: &str) -> Result<Self, QueryError> {
        let limit = match limit {
            0 => Self::DEFAULT_LIMIT,
            limit if limit > Self::MAX_LIMIT => Self::MAX_LIMIT,
            limit => limit,
        };
        let sort = sort.trim();
        let count = sort != Self::IGNORE_COUNT;
        let sort = if sort.is_empty() || !count { Self::DEFAULT_SORT } else { sort };
        let sort = Self::parse_sort::<E>(sort)?;
        Ok(Self { page, limit, sort, count })
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.limit)
    }

    fn parse_sort<E: Entity>(sort: &str) -> Result<Vec<SortColumn>, QueryError> {
        let mut columns = Vec::new();
        for item in sort.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let (name, descending) = match item.strip_prefix('-') {
                Some(name) => (name.trim(), true),
                None => (item, false),
            };
            let field = E::field(name).ok_or_else(|| QueryError::UnknownColumn(name.to_string()))?;
            columns.push(SortColumn { column: field.name, descending });
        }
        if columns.is_empty() {
            columns.push(SortColumn { column: "id", descending: true });
        }
        Ok(columns)
    }
}
