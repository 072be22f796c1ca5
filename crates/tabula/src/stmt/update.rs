use super::{
    insert::{already_initialized, check_column},
    Expr, IntoExpr,
};
use crate::{Column, Result, Session};

use indexmap::IndexMap;
use std::sync::Arc;
use tabula_core::{
    schema::Table,
    stmt::{self, QueryBuilder},
    Error,
};

/// `UPDATE table SET ... [WHERE ...]`
#[derive(Debug)]
pub struct Update {
    table: Arc<Table>,
    filter: Option<stmt::Expr>,

    /// Assigned expressions by column name
    values: IndexMap<String, stmt::Expr>,
}

impl Update {
    pub fn new(table: &Arc<Table>) -> Update {
        Update {
            table: table.clone(),
            filter: None,
            values: IndexMap::new(),
        }
    }

    /// Restricts the update to rows matching `predicate`.
    pub fn filter(mut self, predicate: Expr<bool>) -> Self {
        self.filter = Some(predicate.into_untyped());
        self
    }

    pub fn set<T>(mut self, column: &Column<T>, value: impl IntoExpr<T>) -> Result<Self> {
        check_column(&self.table, column.def())?;

        if self.values.contains_key(column.name()) {
            return Err(already_initialized(column.def()));
        }

        let value = value.into_expr(column.column_type()).into_untyped();
        self.values.insert(column.name().to_string(), value);
        Ok(self)
    }

    pub fn to_sql(&self, builder: &mut QueryBuilder) -> Result<String> {
        if self.values.is_empty() {
            return Err(Error::invalid_statement(format!(
                "update of {} assigns no columns",
                self.table.name
            )));
        }

        let mut assignments = Vec::with_capacity(self.values.len());
        for (name, value) in &self.values {
            assignments.push(format!("{} = {}", builder.identity(name), value.to_sql(builder)?));
        }

        let mut sql = format!(
            "UPDATE {} SET {}",
            builder.identity(&self.table.name),
            assignments.join(", ")
        );

        if let Some(filter) = &self.filter {
            sql.push_str(" WHERE ");
            sql.push_str(&filter.to_sql(builder)?);
        }

        Ok(sql)
    }

    /// Returns the number of rows updated.
    pub fn execute(self, session: &mut Session) -> Result<u64> {
        session.flush_all()?;

        let mut builder = session.query_builder();
        let sql = self.to_sql(&mut builder)?;
        let response = session.execute(&sql, &builder.params()?, &[])?;

        session.clear_referrers_cache();
        Ok(response.count)
    }
}
