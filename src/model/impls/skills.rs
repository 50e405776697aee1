use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use crate::model::enums::column_kind::ColumnKind;
use crate::model::structs::field::Field;
use crate::model::structs::model_base::ModelBase;
use crate::model::structs::skills::Skills;
use crate::model::traits::entity::Entity;
use crate::query::enums::sql_value::SqlValue;

impl<'r> FromRow<'r, AnyRow> for Skills {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            base: ModelBase::from_row(row)?,
            user_id: row.try_get("user_id")?,
            skill_type: row.try_get("skill_type")?,
            skill_name: row.try_get("skill_name")?,
            proficiency_level: row.try_get("proficiency_level")?,
        })
    }
}

impl Entity for Skills {
    const TABLE: &'static str = "skills";
    const CACHE_PREFIX: &'static str = "skills:";
    const FIELDS: &'static [Field] = &[
        Field { name: "user_id", kind: ColumnKind::Integer },
        Field { name: "skill_type", kind: ColumnKind::Varchar(50) },
        Field { name: "skill_name", kind: ColumnKind::Varchar(50) },
        Field { name: "proficiency_level", kind: ColumnKind::Varchar(50) },
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
            SqlValue::from(self.skill_type.as_str()),
            SqlValue::from(self.skill_name.as_str()),
            SqlValue::from(self.proficiency_level.as_str()),
        ]
    }
}
