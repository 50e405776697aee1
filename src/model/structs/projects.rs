use serde::{Deserialize, Serialize};
use crate::model::structs::model_base::ModelBase;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Projects {
    #[serde(flatten)]
    pub base: ModelBase,
    pub user_id: i64,
    pub project_name: String,
    pub role: String,
    pub description: String,
}
