use super::{ColumnDef, Statement};

use tabula_core::schema;

/// A statement replacing a column's definition in place.
#[derive(Debug, Clone)]
pub struct ModifyColumn {
    pub table: String,

    /// New column definition.
    pub column: ColumnDef,
}

impl Statement {
    pub fn modify_column(column: &schema::ColumnDef) -> Self {
        ModifyColumn {
            table: column.table.to_string(),
            column: ColumnDef::from_schema(column, true),
        }
        .into()
    }
}

impl From<ModifyColumn> for Statement {
    fn from(value: ModifyColumn) -> Self {
        Self::ModifyColumn(value)
    }
}
