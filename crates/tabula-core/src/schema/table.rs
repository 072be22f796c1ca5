use super::{ColumnDef, Index};
use crate::{Error, Result};
use std::{hash::Hash, sync::Arc};

/// A table declaration: ordered columns plus index specifications.
///
/// Two tables are equal when their names are.
#[derive(Debug, Clone)]
pub struct Table {
    pub name: Arc<str>,

    /// Columns in declaration order, which is also DDL order
    pub columns: Vec<Arc<ColumnDef>>,

    pub indices: Vec<Index>,
}

impl Table {
    pub fn new(name: impl Into<Arc<str>>) -> Table {
        Table {
            name: name.into(),
            columns: vec![],
            indices: vec![],
        }
    }

    /// Appends a column. Fails if the name is already taken or the column
    /// was declared for another table.
    pub fn add_column(&mut self, column: ColumnDef) -> Result<Arc<ColumnDef>> {
        if column.table != self.name {
            return Err(Error::invalid_schema(format!(
                "column {}.{} cannot be added to table {}",
                column.table, column.name, self.name
            )));
        }

        if self.column(&column.name).is_some() {
            return Err(Error::invalid_schema(format!(
                "duplicate column {} in table {}",
                column.name, self.name
            )));
        }

        if column.column_type.auto_increment && !column.column_type.ty.is_integer() {
            return Err(Error::invalid_schema(format!(
                "auto increment column {}.{} must have an integer type",
                self.name, column.name
            )));
        }

        let column = Arc::new(column);
        self.columns.push(column.clone());
        Ok(column)
    }

    pub fn add_index(&mut self, index: Index) -> Result<()> {
        for name in &index.columns {
            if self.column(name).is_none() {
                return Err(Error::invalid_schema(format!(
                    "index on unknown column {}.{}",
                    self.name, name
                )));
            }
        }
        self.indices.push(index);
        Ok(())
    }

    pub fn column(&self, name: &str) -> Option<&Arc<ColumnDef>> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_keys(&self) -> impl Iterator<Item = &Arc<ColumnDef>> + '_ {
        self.columns.iter().filter(|column| column.primary_key)
    }

    pub fn auto_increment_columns(&self) -> impl Iterator<Item = &Arc<ColumnDef>> + '_ {
        self.columns.iter().filter(|column| column.is_auto_increment())
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Table {}

impl Hash for Table {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
