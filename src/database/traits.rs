/// Store operations consumed by the data access layer.
pub mod relational_store;
