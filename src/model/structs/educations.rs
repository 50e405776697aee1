use serde::{Deserialize, Serialize};
use crate::model::structs::model_base::ModelBase;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Educations {
    #[serde(flatten)]
    pub base: ModelBase,
    pub user_id: i64,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`
    pub end_date: String,
    pub gpa: String,
    pub activities: String,
}
