use serde::{Deserialize, Serialize};
use crate::model::structs::model_base::ModelBase;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workexperiences {
    #[serde(flatten)]
    pub base: ModelBase,
    pub user_id: i64,
    pub company: String,
    pub title: String,
    pub employment_type: String,
    pub job_description: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}
