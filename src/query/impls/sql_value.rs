use std::fmt;
use crate::model::enums::column_kind::ColumnKind;
use crate::query::enums::sql_value::SqlValue;
use crate::query::errors::QueryError;

impl SqlValue {
    /// Ids beyond `i64::MAX` cannot exist in the store and saturate. Data
    /// access rejects them before they reach an equality match.
    pub fn from_id(id: u64) -> Self {
        SqlValue::Int(i64::try_from(id).unwrap_or(i64::MAX))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            SqlValue::Int(value) => *value == 0,
            SqlValue::Text(value) => value.is_empty(),
        }
    }

    /// Converts the value to the representation the column stores.
    pub fn coerce(self, column: &str, kind: ColumnKind) -> Result<SqlValue, QueryError> {
        match (kind, self) {
            (ColumnKind::Integer, SqlValue::Int(value)) => Ok(SqlValue::Int(value)),
            (ColumnKind::Integer, SqlValue::Text(value)) => value
                .trim()
                .parse::<i64>()
                .map(SqlValue::Int)
                .map_err(|_| QueryError::InvalidValue {
                    column: column.to_string(),
                    reason: format!("expected an integer, got '{}'", value),
                }),
            (_, SqlValue::Int(value)) => Ok(SqlValue::Text(value.to_string())),
            (_, SqlValue::Text(value)) => Ok(SqlValue::Text(value)),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Int(value) => write!(f, "{}", value),
            SqlValue::Text(value) => write!(f, "{}", value),
        }
    }
}
