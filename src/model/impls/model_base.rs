use sqlx::Row;
use sqlx::any::AnyRow;
use crate::model::enums::column_kind::ColumnKind;
use crate::model::structs::field::Field;
use crate::model::structs::model_base::ModelBase;

impl ModelBase {
    pub const ID: &'static str = "id";
    pub const CREATED_AT: &'static str = "created_at";
    pub const UPDATED_AT: &'static str = "updated_at";
    pub const DELETED_AT: &'static str = "deleted_at";

    pub const FIELDS: &'static [Field] = &[
        Field { name: Self::ID, kind: ColumnKind::Integer },
        Field { name: Self::CREATED_AT, kind: ColumnKind::Integer },
        Field { name: Self::UPDATED_AT, kind: ColumnKind::Integer },
        Field { name: Self::DELETED_AT, kind: ColumnKind::Integer },
    ];

    pub fn with_id(id: u64) -> Self {
        Self { id, ..Self::default() }
    }

    pub fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get(Self::ID)?;
        Ok(Self {
            id: u64::try_from(id).map_err(|e| sqlx::Error::ColumnDecode {
                index: Self::ID.to_string(),
                source: Box::new(e),
            })?,
            created_at: row.try_get(Self::CREATED_AT)?,
            updated_at: row.try_get(Self::UPDATED_AT)?,
            deleted_at: row.try_get(Self::DELETED_AT)?,
        })
    }
}
