/// Comparison operator of a predicate.
pub mod expression;

/// Logical connective between predicates.
pub mod logic;

/// Bind value of a predicate or column write.
pub mod sql_value;
