use crate::query::enums::sql_value::SqlValue;
use crate::query::structs::column::Column;

impl Column {
    /// Equality condition joined to the next column with `and`.
    pub fn new(name: &str, value: impl Into<SqlValue>) -> Self {
        Self {
            name: name.to_string(),
            exp: String::new(),
            value: value.into(),
            logic: String::new(),
        }
    }

    pub fn exp(mut self, exp: &str) -> Self {
        self.exp = exp.to_string();
        self
    }

    pub fn logic(mut self, logic: &str) -> Self {
        self.logic = logic.to_string();
        self
    }
}
