use super::Join;
use crate::{
    stmt::{Expr, Projection, Query},
    Result, Session,
};

use chrono::FixedOffset;
use std::sync::Arc;
use tabula_core::{
    driver::Vendor,
    schema::{ColumnDef, Table},
    stmt,
};

/// A source of columns: a single table or a join.
#[derive(Debug, Clone)]
pub enum ColumnSet {
    Table(Arc<Table>),
    Join(Join),
}

/// A [`ColumnSet`] together with the expressions projected from it.
#[derive(Debug, Clone)]
pub struct FieldSet {
    source: ColumnSet,
    fields: Vec<stmt::Expr>,
}

impl ColumnSet {
    pub fn columns(&self) -> Vec<Arc<ColumnDef>> {
        match self {
            ColumnSet::Table(table) => table.columns.clone(),
            ColumnSet::Join(join) => join.columns(),
        }
    }

    /// Names of every table the set reads from.
    pub fn table_names(&self) -> Vec<Arc<str>> {
        match self {
            ColumnSet::Table(table) => vec![table.name.clone()],
            ColumnSet::Join(join) => join.tables().map(|table| table.name.clone()).collect(),
        }
    }

    /// Renders the `FROM` clause body.
    pub fn describe(&self, vendor: Vendor, time_zone: FixedOffset) -> Result<String> {
        match self {
            ColumnSet::Table(table) => Ok(vendor.identity(&table.name).into_owned()),
            ColumnSet::Join(join) => join.describe(vendor, time_zone),
        }
    }

    /// Narrows the projection to `fields`.
    pub fn slice(self, fields: &[&dyn Projection]) -> FieldSet {
        FieldSet {
            source: self,
            fields: fields.iter().map(|field| field.to_untyped()).collect(),
        }
    }

    pub fn select(self, session: &Session, predicate: Expr<bool>) -> Query {
        FieldSet::from(self).select(session, predicate)
    }

    pub fn select_all(self, session: &Session) -> Query {
        FieldSet::from(self).select_all(session)
    }
}

impl FieldSet {
    pub fn source(&self) -> &ColumnSet {
        &self.source
    }

    pub fn fields(&self) -> &[stmt::Expr] {
        &self.fields
    }

    pub fn select(self, session: &Session, predicate: Expr<bool>) -> Query {
        Query::new(session, self, Some(predicate))
    }

    pub fn select_all(self, session: &Session) -> Query {
        Query::new(session, self, None)
    }
}

impl From<Arc<Table>> for ColumnSet {
    fn from(value: Arc<Table>) -> Self {
        ColumnSet::Table(value)
    }
}

impl From<&Arc<Table>> for ColumnSet {
    fn from(value: &Arc<Table>) -> Self {
        ColumnSet::Table(value.clone())
    }
}

impl From<Join> for ColumnSet {
    fn from(value: Join) -> Self {
        ColumnSet::Join(value)
    }
}

impl From<ColumnSet> for FieldSet {
    fn from(source: ColumnSet) -> Self {
        let fields = source
            .columns()
            .iter()
            .map(stmt::Expr::column)
            .collect();

        FieldSet { source, fields }
    }
}

impl From<Arc<Table>> for FieldSet {
    fn from(value: Arc<Table>) -> Self {
        ColumnSet::from(value).into()
    }
}

impl From<&Arc<Table>> for FieldSet {
    fn from(value: &Arc<Table>) -> Self {
        ColumnSet::from(value).into()
    }
}

impl From<Join> for FieldSet {
    fn from(value: Join) -> Self {
        ColumnSet::from(value).into()
    }
}
