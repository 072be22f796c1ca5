use tabula_core::{
    schema::{self, ColumnType},
    stmt::Value,
};

/// A column as it appears in DDL.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,

    pub ty: ColumnType,

    /// Render `PRIMARY KEY` inline. Composite keys are emitted as a table
    /// constraint instead.
    pub primary_key: bool,

    pub default: Option<Value>,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &schema::ColumnDef, inline_primary_key: bool) -> ColumnDef {
        ColumnDef {
            name: column.name.clone(),
            ty: column.column_type.clone(),
            primary_key: inline_primary_key && column.primary_key,
            default: column.default.clone(),
        }
    }
}
