use super::{ColumnDef, Statement};

use tabula_core::schema::{ReferenceOption, Table};

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Composite primary key clause
    pub primary_key: Option<Vec<String>>,

    pub foreign_keys: Vec<ForeignKey>,
}

/// `FOREIGN KEY (column) REFERENCES table(column) [ON DELETE ...]`
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub column: String,
    pub references_table: String,
    pub references_column: String,
    pub on_delete: Option<ReferenceOption>,
}

impl Statement {
    /// Creates a table if it does not exist yet.
    pub fn create_table(table: &Table) -> Self {
        let pk: Vec<_> = table.primary_keys().map(|c| c.name.clone()).collect();
        let composite = pk.len() > 1;

        CreateTable {
            name: table.name.to_string(),
            columns: table
                .columns
                .iter()
                .map(|column| ColumnDef::from_schema(column, !composite))
                .collect(),
            primary_key: composite.then_some(pk),
            foreign_keys: table
                .columns
                .iter()
                .filter_map(|column| {
                    let referee = column.referee.as_ref()?;
                    Some(ForeignKey {
                        column: column.name.clone(),
                        references_table: referee.table.to_string(),
                        references_column: referee.name.clone(),
                        on_delete: column.on_delete,
                    })
                })
                .collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
