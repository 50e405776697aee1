use serde::{Deserialize, Serialize};
use crate::model::structs::model_base::ModelBase;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserIntroductions {
    #[serde(flatten)]
    pub base: ModelBase,
    pub user_id: i64,
    pub title: String,
    pub content: String,
}
