use super::Statement;

use tabula_core::schema;

/// A statement to drop a column from a table.
#[derive(Debug, Clone)]
pub struct DropColumn {
    pub table: String,

    /// Name of the column to drop.
    pub name: String,
}

impl Statement {
    pub fn drop_column(column: &schema::ColumnDef) -> Self {
        DropColumn {
            table: column.table.to_string(),
            name: column.name.clone(),
        }
        .into()
    }
}

impl From<DropColumn> for Statement {
    fn from(value: DropColumn) -> Self {
        Self::DropColumn(value)
    }
}
