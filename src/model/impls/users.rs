use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use crate::model::enums::column_kind::ColumnKind;
use crate::model::structs::field::Field;
use crate::model::structs::model_base::ModelBase;
use crate::model::structs::users::Users;
use crate::model::traits::entity::Entity;
use crate::query::enums::sql_value::SqlValue;

impl<'r> FromRow<'r, AnyRow> for Users {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            base: ModelBase::from_row(row)?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            profile_picture_url: row.try_get("profile_picture_url")?,
            about: row.try_get("about")?,
        })
    }
}

impl Entity for Users {
    const TABLE: &'static str = "users";
    const CACHE_PREFIX: &'static str = "users:";
    const FIELDS: &'static [Field] = &[
        Field { name: "first_name", kind: ColumnKind::Varchar(50) },
        Field { name: "last_name", kind: ColumnKind::Varchar(50) },
        Field { name: "profile_picture_url", kind: ColumnKind::Varchar(255) },
        Field { name: "about", kind: ColumnKind::Text },
    ];

    fn base(&self) -> &ModelBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModelBase {
        &mut self.base
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::from(self.first_name.as_str()),
            SqlValue::from(self.last_name.as_str()),
            SqlValue::from(self.profile_picture_url.as_str()),
            SqlValue::from(self.about.as_str()),
        ]
    }
}
