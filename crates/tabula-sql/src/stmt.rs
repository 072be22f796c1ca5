mod add_column;
pub use add_column::AddColumn;

mod column_def;
pub use column_def::ColumnDef;

mod create_index;
pub use create_index::CreateIndex;

mod create_table;
pub use create_table::{CreateTable, ForeignKey};

mod drop_column;
pub use drop_column::DropColumn;

mod drop_table;
pub use drop_table::DropTable;

mod modify_column;
pub use modify_column::ModifyColumn;

/// A schema statement.
#[derive(Debug, Clone)]
pub enum Statement {
    AddColumn(AddColumn),
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    DropColumn(DropColumn),
    DropTable(DropTable),
    ModifyColumn(ModifyColumn),
}

impl Statement {
    pub fn is_create_table(&self) -> bool {
        matches!(self, Statement::CreateTable(_))
    }
}
