use crate::query::enums::expression::Expression;
use crate::query::enums::logic::Logic;
use crate::query::enums::sql_value::SqlValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: &'static str,
    pub expression: Expression,
    pub values: Vec<SqlValue>,
    /// Joins this predicate to the next one; ignored on the last.
    pub logic: Logic,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub predicates: Vec<Predicate>,
}
