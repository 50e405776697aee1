use crate::model::enums::column_kind::ColumnKind;
use crate::model::traits::entity::Entity;
use crate::query::enums::expression::Expression;
use crate::query::enums::logic::Logic;
use crate::query::enums::sql_value::SqlValue;
use crate::query::errors::QueryError;
use crate::query::structs::column::Column;
use crate::query::structs::filter::{Filter, Predicate};

impl Filter {
    pub fn new(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    pub fn from_columns<E: Entity>(columns: &[Column]) -> Result<Self, QueryError> {
        columns
            .iter()
            .map(Predicate::from_column::<E>)
            .collect::<Result<Vec<_>, _>>()
            .map(Filter::new)
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl Predicate {
    pub fn new(column: &'static str, expression: Expression, value: SqlValue) -> Self {
        Self {
            column,
            expression,
            values: vec![value],
            logic: Logic::And,
        }
    }

    pub fn from_column<E: Entity>(column: &Column) -> Result<Self, QueryError> {
        let name = column.name.trim();
        let field = E::field(name).ok_or_else(|| QueryError::UnknownColumn(name.to_string()))?;
        let expression: Expression = column.exp.parse()?;
        let logic: Logic = column.logic.parse()?;
        let values = match expression {
            Expression::In => {
                let raw: Vec<SqlValue> = match &column.value {
                    SqlValue::Text(list) => list
                        .split(',')
                        .map(str::trim)
                        .filter(|item| !item.is_empty())
                        .map(SqlValue::from)
                        .collect(),
                    SqlValue::Int(value) => vec![SqlValue::Int(*value)],
                };
                if raw.is_empty() {
                    return Err(QueryError::InvalidValue {
                        column: field.name.to_string(),
                        reason: "in requires at least one value".to_string(),
                    });
                }
                raw.into_iter()
                    .map(|value| value.coerce(field.name, field.kind))
                    .collect::<Result<Vec<_>, _>>()?
            }
            Expression::Like => {
                if field.kind == ColumnKind::Integer {
                    return Err(QueryError::InvalidValue {
                        column: field.name.to_string(),
                        reason: "like is only supported on text columns".to_string(),
                    });
                }
                vec![SqlValue::Text(format!("%{}%", column.value))]
            }
            _ => vec![column.value.clone().coerce(field.name, field.kind)?],
        };
        Ok(Self {
            column: field.name,
            expression,
            values,
            logic,
        })
    }
}
