use super::IntoExpr;
use crate::{
    cursor::{Fields, ResultRow},
    Column, Result, Session,
};

use indexmap::IndexMap;
use std::sync::Arc;
use tabula_core::{
    driver::Vendor,
    schema::{ColumnDef, Table},
    stmt::{self, QueryBuilder, TypedValue, Value},
    Error,
};

/// A single-row `INSERT`.
#[derive(Debug)]
pub struct Insert {
    table: Arc<Table>,

    /// Assigned expressions by column name
    values: IndexMap<String, stmt::Expr>,
}

impl Insert {
    pub fn new(table: &Arc<Table>) -> Insert {
        Insert {
            table: table.clone(),
            values: IndexMap::new(),
        }
    }

    /// Assigns `column`. Each column can be assigned once.
    pub fn set<T>(mut self, column: &Column<T>, value: impl IntoExpr<T>) -> Result<Self> {
        check_column(&self.table, column.def())?;

        if self.values.contains_key(column.name()) {
            return Err(already_initialized(column.def()));
        }

        let value = value.into_expr(column.column_type()).into_untyped();
        self.values.insert(column.name().to_string(), value);
        Ok(self)
    }

    /// Columns written by the statement: assigned ones, plus unassigned
    /// ones that have a default.
    fn columns(&self) -> impl Iterator<Item = &Arc<ColumnDef>> + '_ {
        self.table.columns.iter().filter(|column| {
            self.values.contains_key(&column.name)
                || (!column.is_auto_increment() && column.default.is_some())
        })
    }

    pub fn to_sql(&self, builder: &mut QueryBuilder) -> Result<String> {
        let table = builder.identity(&self.table.name);
        let mut names = vec![];
        let mut values = vec![];

        for column in self.columns() {
            names.push(builder.identity(&column.name));

            let value = match self.values.get(&column.name) {
                Some(expr) => expr.to_sql(builder)?,
                None => {
                    let default = column.default.clone().unwrap_or_default();
                    builder.register_argument(default, &column.column_type)?
                }
            };
            values.push(value);
        }

        if names.is_empty() {
            return Ok(match builder.vendor() {
                Vendor::Mysql => format!("INSERT INTO {table} () VALUES ()"),
                _ => format!("INSERT INTO {table} DEFAULT VALUES"),
            });
        }

        Ok(format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            names.join(", "),
            values.join(", ")
        ))
    }

    /// Runs the insert and returns the written row, including the key
    /// generated for an unassigned auto-increment column.
    ///
    /// Columns assigned a literal or left to their default carry that value.
    /// Columns assigned any other expression are not read back and come
    /// back NULL.
    pub fn execute(self, session: &mut Session) -> Result<ResultRow> {
        session.flush_all()?;

        let mut builder = session.query_builder();
        let sql = self.to_sql(&mut builder)?;

        let auto: Vec<_> = self
            .table
            .auto_increment_columns()
            .filter(|column| !self.values.contains_key(&column.name))
            .map(|column| session.identity(&column.name))
            .collect();
        let auto_names: Vec<_> = auto.iter().map(String::as_str).collect();

        let response = session.execute(&sql, &builder.params()?, &auto_names)?;
        session.clear_referrers_cache();

        if !auto.is_empty() && response.generated_keys.is_empty() {
            return Err(Error::invalid_record_count(format!(
                "no key generated for insert into {}",
                self.table.name
            )));
        }

        let exprs: Vec<_> = self.table.columns.iter().map(stmt::Expr::column).collect();
        let fields = Fields::new(session.vendor(), session.time_zone(), &exprs)?;

        let data = self
            .table
            .columns
            .iter()
            .map(|column| match self.values.get(&column.name) {
                Some(stmt::Expr::Value(TypedValue { value, .. })) => value.clone(),
                Some(_) => Value::Null,
                None => column.default.clone().unwrap_or_default(),
            })
            .collect();

        let mut row = ResultRow::new(Arc::new(fields), data);

        if let (Some(column), Some(key)) = (
            self.table
                .auto_increment_columns()
                .find(|column| !self.values.contains_key(&column.name)),
            response.generated_keys.first(),
        ) {
            row.set_value(&stmt::Expr::column(column), Value::I64(*key))?;
        }

        Ok(row)
    }
}

/// Fails unless `column` belongs to `table`.
pub(super) fn check_column(table: &Table, column: &ColumnDef) -> Result<()> {
    if column.table != table.name {
        return Err(Error::invalid_statement(format!(
            "column {}.{} does not belong to table {}",
            column.table, column.name, table.name
        )));
    }
    Ok(())
}

pub(super) fn already_initialized(column: &ColumnDef) -> Error {
    Error::invalid_statement(format!(
        "{}.{} is already initialized",
        column.table, column.name
    ))
}
