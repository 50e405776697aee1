use std::str::FromStr;
use crate::query::enums::logic::Logic;
use crate::query::errors::QueryError;

impl Logic {
    pub fn keyword(&self) -> &'static str {
        match self {
            Logic::And => "AND",
            Logic::Or => "OR",
        }
    }
}

impl FromStr for Logic {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "" | "and" | "&" | "&&" => Ok(Logic::And),
            "or" | "||" => Ok(Logic::Or),
            _ => Err(QueryError::UnknownLogic(value.to_string())),
        }
    }
}
