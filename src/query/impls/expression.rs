use std::str::FromStr;
use crate::query::enums::expression::Expression;
use crate::query::errors::QueryError;

impl Expression {
    pub fn operator(&self) -> &'static str {
        match self {
            Expression::Eq => "=",
            Expression::Neq => "<>",
            Expression::Gt => ">",
            Expression::Gte => ">=",
            Expression::Lt => "<",
            Expression::Lte => "<=",
            Expression::Like => "LIKE",
            Expression::In => "IN",
        }
    }
}

impl FromStr for Expression {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "" | "=" | "eq" => Ok(Expression::Eq),
            "!=" | "<>" | "neq" => Ok(Expression::Neq),
            ">" | "gt" => Ok(Expression::Gt),
            ">=" | "gte" => Ok(Expression::Gte),
            "<" | "lt" => Ok(Expression::Lt),
            "<=" | "lte" => Ok(Expression::Lte),
            "like" => Ok(Expression::Like),
            "in" => Ok(Expression::In),
            _ => Err(QueryError::UnknownExpression(value.to_string())),
        }
    }
}
