use crate::model::enums::column_kind::ColumnKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: ColumnKind,
}
