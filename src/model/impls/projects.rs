use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use crate::model::enums::column_kind::ColumnKind;
use crate::model::structs::field::Field;
use crate::model::structs::model_base::ModelBase;
use crate::model::structs::projects::Projects;
use crate::model::traits::entity::Entity;
use crate::query::enums::sql_value::SqlValue;

impl<'r> FromRow<'r, AnyRow> for Projects {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            base: ModelBase::from_row(row)?,
            user_id: row.try_get("user_id")?,
            project_name: row.try_get("project_name")?,
            role: row.try_get("role")?,
            description: row.try_get("description")?,
        })
    }
}

impl Entity for Projects {
    const TABLE: &'static str = "projects";
    const CACHE_PREFIX: &'static str = "projects:";
    const FIELDS: &'static [Field] = &[
        Field { name: "user_id", kind: ColumnKind::Integer },
        Field { name: "project_name", kind: ColumnKind::Varchar(100) },
        Field { name: "role", kind: ColumnKind::Varchar(50) },
        Field { name: "description", kind: ColumnKind::Text },
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
            SqlValue::from(self.project_name.as_str()),
            SqlValue::from(self.role.as_str()),
            SqlValue::from(self.description.as_str()),
        ]
    }
}
