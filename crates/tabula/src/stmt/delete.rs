use super::Expr;
use crate::{Result, Session};

use std::sync::Arc;
use tabula_core::{
    schema::Table,
    stmt::{self, QueryBuilder},
};

/// `DELETE FROM table [WHERE ...]`
#[derive(Debug)]
pub struct Delete {
    table: Arc<Table>,
    filter: Option<stmt::Expr>,
}

impl Delete {
    /// Deletes every row unless a filter is added.
    pub fn new(table: &Arc<Table>) -> Delete {
        Delete {
            table: table.clone(),
            filter: None,
        }
    }

    pub fn filter(mut self, predicate: Expr<bool>) -> Self {
        self.filter = Some(predicate.into_untyped());
        self
    }

    pub fn to_sql(&self, builder: &mut QueryBuilder) -> Result<String> {
        let mut sql = format!("DELETE FROM {}", builder.identity(&self.table.name));

        if let Some(filter) = &self.filter {
            sql.push_str(" WHERE ");
            sql.push_str(&filter.to_sql(builder)?);
        }

        Ok(sql)
    }

    /// Returns the number of rows deleted.
    pub fn execute(self, session: &mut Session) -> Result<u64> {
        session.flush_all()?;

        let mut builder = session.query_builder();
        let sql = self.to_sql(&mut builder)?;
        let response = session.execute(&sql, &builder.params()?, &[])?;

        session.clear_referrers_cache();
        Ok(response.count)
    }
}
