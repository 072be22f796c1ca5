use super::{ColumnDef, Statement};

use tabula_core::schema;

/// A statement to add a column to a table.
#[derive(Debug, Clone)]
pub struct AddColumn {
    /// Name of the table to add the column to.
    pub table: String,

    /// Column definition.
    pub column: ColumnDef,
}

impl Statement {
    /// Adds a column to its table.
    pub fn add_column(column: &schema::ColumnDef) -> Self {
        AddColumn {
            table: column.table.to_string(),
            column: ColumnDef::from_schema(column, true),
        }
        .into()
    }
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}
