use serde::{Deserialize, Serialize};
use crate::model::structs::model_base::ModelBase;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    #[serde(flatten)]
    pub base: ModelBase,
    pub user_id: i64,
    pub skill_type: String,
    pub skill_name: String,
    pub proficiency_level: String,
}
