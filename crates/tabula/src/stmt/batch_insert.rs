use super::{
    insert::{already_initialized, check_column},
    Primitive,
};
use crate::{Column, Result, Session};

use indexmap::IndexMap;
use std::{borrow::Cow, sync::Arc};
use tabula_core::{
    driver::Vendor,
    schema::{ColumnDef, Table},
    stmt::Value,
    Error,
};

/// Inserts many rows of one table with a single statement.
///
/// Call [`add_batch`](Self::add_batch) to start each row, then
/// [`set`](Self::set) its columns.
#[derive(Debug)]
pub struct BatchInsertQuery {
    table: Arc<Table>,

    /// `INSERT IGNORE` semantics
    ignore: bool,

    /// `REPLACE` semantics
    replace: bool,

    /// Driver values per row, by column name
    data: Vec<IndexMap<String, Value>>,
}

impl BatchInsertQuery {
    pub fn new(table: &Arc<Table>) -> BatchInsertQuery {
        BatchInsertQuery {
            table: table.clone(),
            ignore: false,
            replace: false,
            data: vec![],
        }
    }

    /// Skips rows that violate a unique constraint.
    pub fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Overwrites rows that violate a unique constraint.
    pub fn replace(mut self) -> Self {
        self.replace = true;
        self
    }

    /// Starts a new row.
    pub fn add_batch(&mut self) {
        self.data.push(IndexMap::new());
    }

    /// Number of rows added so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Assigns `column` in the current row.
    pub fn set<T: Primitive>(&mut self, column: &Column<T>, value: T) -> Result<()> {
        check_column(&self.table, column.def())?;

        let Some(row) = self.data.last_mut() else {
            return Err(Error::invalid_statement(
                "add_batch must be called before setting values",
            ));
        };

        if row.contains_key(column.name()) {
            return Err(already_initialized(column.def()));
        }

        let value = column.column_type().value_to_db(&value.into_value())?;
        row.insert(column.name().to_string(), value);
        Ok(())
    }

    /// Columns that receive explicit values, and the auto-increment
    /// columns the database generates.
    ///
    /// An auto-increment column is explicit only when every row assigns it.
    /// Assigning it in some rows and not others is rejected, since the keys
    /// generated for the other rows could not be reported.
    fn partition(&self) -> Result<(Vec<&Arc<ColumnDef>>, Vec<&Arc<ColumnDef>>)> {
        let mut explicit = vec![];
        let mut generated = vec![];

        for column in &self.table.columns {
            if !column.is_auto_increment() {
                explicit.push(column);
                continue;
            }

            let assigned = self
                .data
                .iter()
                .filter(|row| row.contains_key(&column.name))
                .count();

            if assigned == 0 {
                generated.push(column);
            } else if assigned == self.data.len() {
                explicit.push(column);
            } else {
                return Err(Error::invalid_statement(format!(
                    "auto-increment column {}.{} is assigned in {assigned} of {} rows",
                    column.table,
                    column.name,
                    self.data.len()
                )));
            }
        }

        Ok((explicit, generated))
    }

    /// Renders the statement and its parameters.
    pub fn to_sql(&self, session: &Session) -> Result<(String, Vec<Value>)> {
        let (explicit, generated) = self.partition()?;
        let vendor = session.vendor();

        // With nothing to bind, every row names the generated columns and
        // lets the database fill them.
        let fill = explicit.is_empty().then_some(match vendor {
            Vendor::Postgresql => "DEFAULT",
            _ => "NULL",
        });
        let columns = if fill.is_some() { generated } else { explicit };

        if columns.is_empty() {
            return Err(Error::invalid_statement(format!(
                "table {} has no columns to insert",
                self.table.name
            )));
        }

        let insert = if self.replace {
            if session.vendor_compatible_with() == Vendor::Mysql {
                "INSERT"
            } else if session.capability().replace {
                "REPLACE"
            } else {
                return Err(Error::invalid_statement(format!(
                    "{:?} does not support replace",
                    vendor
                )));
            }
        } else if self.ignore {
            match vendor {
                Vendor::Sqlite => "INSERT OR IGNORE",
                _ => "INSERT IGNORE",
            }
        } else {
            "INSERT"
        };

        let names: Vec<_> = columns
            .iter()
            .map(|column| session.identity(&column.name))
            .collect();

        let mut params = Vec::with_capacity(self.data.len() * columns.len());
        let mut tuples = Vec::with_capacity(self.data.len());

        for row in &self.data {
            let mut placeholders = Vec::with_capacity(columns.len());

            for column in &columns {
                if let Some(fill) = fill {
                    placeholders.push(Cow::Borrowed(fill));
                    continue;
                }

                let value = match row.get(&column.name) {
                    Some(value) => value.clone(),
                    None => match &column.default {
                        Some(default) => column.column_type.value_to_db(default)?,
                        None => Value::Null,
                    },
                };

                params.push(value);
                placeholders.push(vendor.placeholder(params.len()));
            }

            tuples.push(format!("({})", placeholders.join(", ")));
        }

        let mut sql = format!(
            "{insert} INTO {} ({}) VALUES {}",
            session.identity(&self.table.name),
            names.join(", "),
            tuples.join(",")
        );

        if self.replace && session.vendor_compatible_with() == Vendor::Mysql {
            let updates: Vec<_> = names
                .iter()
                .map(|name| format!("{name} = VALUES({name})"))
                .collect();
            sql.push_str(" ON DUPLICATE KEY UPDATE ");
            sql.push_str(&updates.join(", "));
        }

        Ok((sql, params))
    }

    /// Inserts every added row and returns the generated keys, one per row
    /// when the table has an auto-increment column the rows leave unset.
    ///
    /// Drivers that report only the last generated key of a multi-row
    /// insert get the preceding keys synthesized by counting back from it.
    /// That assumes the database handed the statement a contiguous block of
    /// keys, which concurrent writers can break. Insert rows one at a time
    /// where exact keys matter on such drivers.
    pub fn execute(&self, session: &mut Session) -> Result<Vec<i64>> {
        if self.data.is_empty() {
            return Ok(vec![]);
        }

        session.flush_all()?;

        let (sql, params) = self.to_sql(session)?;
        let (_, generated) = self.partition()?;
        let auto: Vec<_> = generated
            .iter()
            .map(|column| session.identity(&column.name))
            .collect();
        let auto_names: Vec<_> = auto.iter().map(String::as_str).collect();

        let response = session.execute(&sql, &params, &auto_names)?;
        session.clear_referrers_cache();

        let rows = self.data.len() as u64;
        if !self.ignore && !self.replace && response.count != rows {
            return Err(Error::invalid_record_count(format!(
                "inserted {} rows into {} but expected {rows}",
                response.count, self.table.name
            )));
        }

        if auto.is_empty() {
            return Ok(vec![]);
        }

        let mut keys = response.generated_keys;

        // Only the last key was reported; the others precede it.
        if !session.capability().all_generated_keys && keys.len() == 1 && response.count > 1 {
            let last = keys[0];
            let count = i64::try_from(response.count)?;
            keys = (0..count).map(|i| last - count + 1 + i).collect();
        }

        if keys.len() as u64 != response.count {
            return Err(Error::invalid_record_count(format!(
                "{} generated keys for {} inserted rows",
                keys.len(),
                response.count
            )));
        }

        tracing::debug!(
            table = %self.table.name,
            rows = response.count,
            keys = keys.len(),
            "batch insert complete"
        );

        Ok(keys)
    }
}
