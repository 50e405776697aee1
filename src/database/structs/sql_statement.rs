use crate::query::enums::sql_value::SqlValue;

/// SQL text and the values bound to its placeholders, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    pub sql: String,
    pub values: Vec<SqlValue>,
}
