use serde::{Deserialize, Serialize};
use crate::query::structs::column::Column;

/// `page` starts at 0. `sort` is a comma separated column list, a leading `-`
/// means descending; the value `ignore count` skips the total count.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub sort: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}
