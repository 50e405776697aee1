use serde::{Deserialize, Serialize};
use crate::query::structs::column::Column;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Conditions {
    pub columns: Vec<Column>,
}
