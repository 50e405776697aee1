/// Raw column condition as supplied by a caller.
pub mod column;

/// Conjunctive/disjunctive set of column conditions.
pub mod conditions;

/// Offset paging parameters with optional column conditions.
pub mod params;

/// Validated predicates ready for rendering.
pub mod filter;

/// Validated paging window and ordering.
pub mod page;
