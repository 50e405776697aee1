use serde::{Deserialize, Serialize};
use crate::query::enums::sql_value::SqlValue;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    #[serde(default)]
    pub exp: String,
    pub value: SqlValue,
    #[serde(default)]
    pub logic: String,
}
