use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use crate::model::enums::column_kind::ColumnKind;
use crate::model::structs::field::Field;
use crate::model::structs::model_base::ModelBase;
use crate::model::structs::workexperiences::Workexperiences;
use crate::model::traits::entity::Entity;
use crate::query::enums::sql_value::SqlValue;

impl<'r> FromRow<'r, AnyRow> for Workexperiences {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            base: ModelBase::from_row(row)?,
            user_id: row.try_get("user_id")?,
            company: row.try_get("company")?,
            title: row.try_get("title")?,
            employment_type: row.try_get("employment_type")?,
            job_description: row.try_get("job_description")?,
            location: row.try_get("location")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
        })
    }
}

impl Entity for Workexperiences {
    const TABLE: &'static str = "workexperiences";
    const CACHE_PREFIX: &'static str = "workexperiences:";
    const FIELDS: &'static [Field] = &[
        Field { name: "user_id", kind: ColumnKind::Integer },
        Field { name: "company", kind: ColumnKind::Varchar(100) },
        Field { name: "title", kind: ColumnKind::Varchar(50) },
        Field { name: "employment_type", kind: ColumnKind::Varchar(50) },
        Field { name: "job_description", kind: ColumnKind::Text },
        Field { name: "location", kind: ColumnKind::Varchar(100) },
        Field { name: "start_date", kind: ColumnKind::Varchar(10) },
        Field { name: "end_date", kind: ColumnKind::Varchar(10) },
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
            SqlValue::from(self.company.as_str()),
            SqlValue::from(self.title.as_str()),
            SqlValue::from(self.employment_type.as_str()),
            SqlValue::from(self.job_description.as_str()),
            SqlValue::from(self.location.as_str()),
            SqlValue::from(self.start_date.as_str()),
            SqlValue::from(self.end_date.as_str()),
        ]
    }
}
