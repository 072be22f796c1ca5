use crate::{Column, Primitive, Query, Result, ResultRow, Session};

use std::sync::Arc;
use tabula_core::schema::Table;

/// A table read by key into a plain data type.
///
/// Implementors name the table, its key column, and how a row decodes into
/// [`Data`](Self::Data). Lookups are then provided.
///
/// ```
/// use std::sync::Arc;
/// use tabula::{schema::Table, Column, LookupTable, ResultRow};
///
/// struct Cities {
///     table: Arc<Table>,
///     id: Column<i32>,
///     name: Column<String>,
/// }
///
/// impl LookupTable for Cities {
///     type Key = i32;
///     type Data = (i32, String);
///
///     fn table(&self) -> &Arc<Table> {
///         &self.table
///     }
///
///     fn id(&self) -> &Column<i32> {
///         &self.id
///     }
///
///     fn to_data(&self, row: &ResultRow) -> tabula::Result<(i32, String)> {
///         Ok((row.get(&self.id)?, row.get(&self.name)?))
///     }
/// }
/// ```
pub trait LookupTable {
    type Key: Primitive;
    type Data;

    fn table(&self) -> &Arc<Table>;

    fn id(&self) -> &Column<Self::Key>;

    fn to_data(&self, row: &ResultRow) -> Result<Self::Data>;

    /// Loads the row with `key`, if present.
    fn lookup(&self, session: &mut Session, key: Self::Key) -> Result<Option<Self::Data>> {
        let mut query = Query::new(session, self.table(), Some(self.id().eq(key)));

        match query.first(session)? {
            Some(row) => self.to_data(&row).map(Some),
            None => Ok(None),
        }
    }

    /// Loads the rows whose key is in `keys`. Missing keys are skipped.
    fn lookup_list(&self, session: &mut Session, keys: Vec<Self::Key>) -> Result<Vec<Self::Data>> {
        if keys.is_empty() {
            return Ok(vec![]);
        }

        let mut query = Query::new(session, self.table(), Some(self.id().in_list(keys)));
        query
            .iter(session)?
            .map(|row| self.to_data(&row))
            .collect()
    }
}
