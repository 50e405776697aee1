/// Storage kind of an entity column.
pub mod column_kind;
