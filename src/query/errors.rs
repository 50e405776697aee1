use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("query conditions are empty")]
    EmptyConditions,

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("unknown expression: {0}")]
    UnknownExpression(String),

    #[error("unknown logic: {0}")]
    UnknownLogic(String),

    #[error("invalid value for column {column}: {reason}")]
    InvalidValue { column: String, reason: String },
}
