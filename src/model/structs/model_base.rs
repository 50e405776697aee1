use serde::{Deserialize, Serialize};

/// Embedded in every entity.
///
/// Timestamps are unix seconds. `deleted_at` is set by a soft delete; rows
/// carrying it are invisible to every read.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModelBase {
    pub id: u64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<i64>,
}
