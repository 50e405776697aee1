use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use crate::model::enums::column_kind::ColumnKind;
use crate::model::structs::field::Field;
use crate::model::structs::model_base::ModelBase;
use crate::model::structs::user_introductions::UserIntroductions;
use crate::model::traits::entity::Entity;
use crate::query::enums::sql_value::SqlValue;

impl<'r> FromRow<'r, AnyRow> for UserIntroductions {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            base: ModelBase::from_row(row)?,
            user_id: row.try_get("user_id")?,
            title: row.try_get("title")?,
            content: row.try_get("content")?,
        })
    }
}

impl Entity for UserIntroductions {
    const TABLE: &'static str = "user_introductions";
    const CACHE_PREFIX: &'static str = "user_introductions:";
    const FIELDS: &'static [Field] = &[
        Field { name: "user_id", kind: ColumnKind::Integer },
        Field { name: "title", kind: ColumnKind::Varchar(100) },
        Field { name: "content", kind: ColumnKind::Text },
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
            SqlValue::from(self.title.as_str()),
            SqlValue::from(self.content.as_str()),
        ]
    }
}
