use super::{ColumnType, ReferenceOption, Type};
use crate::stmt::Value;
use std::sync::Arc;

/// Declaration of one column.
///
/// A descriptor is assembled with the builder-style methods below while the
/// owning table is defined and is immutable once added to it. The column
/// refers back to its table by name only.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Name of the owning table
    pub table: Arc<str>,

    pub name: String,

    pub column_type: ColumnType,

    /// Member of the table's primary key
    pub primary_key: bool,

    /// Foreign-key target of this column, if any
    pub referee: Option<ColumnRef>,

    pub on_delete: Option<ReferenceOption>,

    /// Used when an insert does not assign the column
    pub default: Option<Value>,
}

/// Identifies a column by table and column name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    pub table: Arc<str>,
    pub name: String,
}

impl ColumnDef {
    pub fn new(table: impl Into<Arc<str>>, name: impl Into<String>, ty: Type) -> ColumnDef {
        ColumnDef {
            table: table.into(),
            name: name.into(),
            column_type: ColumnType::new(ty),
            primary_key: false,
            referee: None,
            on_delete: None,
            default: None,
        }
    }

    pub fn primary_key(mut self) -> ColumnDef {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> ColumnDef {
        self.column_type.auto_increment = true;
        self
    }

    pub fn nullable(mut self) -> ColumnDef {
        self.column_type.nullable = true;
        self
    }

    pub fn references(mut self, target: &ColumnDef) -> ColumnDef {
        self.referee = Some(target.key());
        self
    }

    pub fn on_delete(mut self, option: ReferenceOption) -> ColumnDef {
        self.on_delete = Some(option);
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> ColumnDef {
        self.default = Some(value.into());
        self
    }

    pub fn key(&self) -> ColumnRef {
        ColumnRef {
            table: self.table.clone(),
            name: self.name.clone(),
        }
    }

    /// Returns `true` if this column is a foreign key to `target`.
    pub fn references_column(&self, target: &ColumnDef) -> bool {
        self.referee
            .as_ref()
            .is_some_and(|referee| *referee.table == *target.table && referee.name == target.name)
    }

    pub fn is_auto_increment(&self) -> bool {
        self.column_type.auto_increment
    }
}
