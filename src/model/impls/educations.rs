use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use crate::model::enums::column_kind::ColumnKind;
use crate::model::structs::field::Field;
use crate::model::structs::model_base::ModelBase;
use crate::model::structs::educations::Educations;
use crate::model::traits::entity::Entity;
use crate::query::enums::sql_value::SqlValue;

impl<'r> FromRow<'r, AnyRow> for Educations {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            base: ModelBase::from_row(row)?,
            user_id: row.try_get("user_id")?,
            school: row.try_get("school")?,
            degree: row.try_get("degree")?,
            field_of_study: row.try_get("field_of_study")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            gpa: row.try_get("gpa")?,
            activities: row.try_get("activities")?,
        })
    }
}

impl Entity for Educations {
    const TABLE: &'static str = "educations";
    const CACHE_PREFIX: &'static str = "educations:";
    const FIELDS: &'static [Field] = &[
        Field { name: "user_id", kind: ColumnKind::Integer },
        Field { name: "school", kind: ColumnKind::Varchar(100) },
        Field { name: "degree", kind: ColumnKind::Varchar(50) },
        Field { name: "field_of_study", kind: ColumnKind::Varchar(50) },
        Field { name: "start_date", kind: ColumnKind::Varchar(10) },
        Field { name: "end_date", kind: ColumnKind::Varchar(10) },
        Field { name: "gpa", kind: ColumnKind::Varchar(16) },
        Field { name: "activities", kind: ColumnKind::Text },
    ];

    fn base(&self) -> &ModelBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModelBase {
        &mut self.base
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Int(self.user_id),
            SqlValue::from(self.school.as_str()),
            SqlValue::from(self.degree.as_str()),
            SqlValue::from(self.field_of_study.as_str()),
            SqlValue::from(self.start_date.as_str()),
            SqlValue::from(self.end_date.as_str()),
            SqlValue::from(self.gpa.as_str()),
            SqlValue::from(self.activities.as_str()),
        ]
    }
}
