use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// 64 bit signed integer.
    Integer,
    /// Bounded string, the value is the maximum length.
    Varchar(u16),
    /// Unbounded text.
    Text,
}
