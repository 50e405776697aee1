pub mod column;
pub mod conditions;
pub mod expression;
pub mod filter;
pub mod logic;
pub mod page;
pub mod params;
pub mod sql_value;
