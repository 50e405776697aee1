use serde::{Deserialize, Serialize};
use crate::model::structs::model_base::ModelBase;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Users {
    #[serde(flatten)]
    pub base: ModelBase,
    pub first_name: String,
    pub last_name: String,
    pub profile_picture_url: String,
    pub about: String,
}
