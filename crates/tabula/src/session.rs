mod builder;
pub use builder::Builder;

mod connect;
pub use connect::connect;

use crate::{cache::EntityCache, Result};

use chrono::FixedOffset;
use std::{sync::Arc, time::Instant};
use tabula_core::{
    driver::{Capability, ExecResponse, Rows, Vendor},
    schema::{ColumnDef, Table},
    stmt::{QueryBuilder, Value},
    Connection, Error,
};
use tabula_sql::{Serializer, Statement};

/// A connection plus the settings statements are built with.
///
/// Operations that touch the database take the session explicitly. A
/// session is used from one thread at a time and runs statements in the
/// order they are submitted.
#[derive(Debug)]
pub struct Session {
    connection: Box<dyn Connection>,

    /// Zone date-time literals are rendered in
    time_zone: FixedOffset,

    /// Default for `Query::for_update`, before vendor gating
    selects_for_update: bool,

    entity_cache: Box<dyn EntityCache>,
}

impl Session {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn capability(&self) -> &'static Capability {
        self.connection.capability()
    }

    pub fn vendor(&self) -> Vendor {
        self.capability().vendor
    }

    pub fn vendor_compatible_with(&self) -> Vendor {
        self.capability().compatible_with
    }

    pub fn vendor_supports_for_update(&self) -> bool {
        self.capability().select_for_update
    }

    pub fn selects_for_update(&self) -> bool {
        self.selects_for_update
    }

    pub fn time_zone(&self) -> FixedOffset {
        self.time_zone
    }

    /// Quoted identifier for a table or column name.
    pub fn identity(&self, name: &str) -> String {
        self.vendor().identity(name).into_owned()
    }

    /// `table.column`, each part quoted as needed.
    pub fn full_identity(&self, column: &ColumnDef) -> String {
        self.vendor().full_identity(column)
    }

    /// A builder that binds literals as positional parameters.
    pub fn query_builder(&self) -> QueryBuilder {
        QueryBuilder::prepared(self.vendor(), self.time_zone)
    }

    /// A builder that inlines literals.
    pub fn literal_builder(&self) -> QueryBuilder {
        QueryBuilder::literal(self.vendor(), self.time_zone)
    }

    /// Runs `f` against the connection as the execution of `sql`.
    ///
    /// Failures are returned with the statement text attached.
    pub fn exec<R>(
        &mut self,
        sql: &str,
        args: usize,
        f: impl FnOnce(&mut dyn Connection) -> Result<R>,
    ) -> Result<R> {
        let span = tracing::debug_span!("exec", sql);
        let _enter = span.enter();

        tracing::debug!(args, "executing statement");
        let start = Instant::now();

        match f(&mut *self.connection) {
            Ok(ret) => {
                tracing::debug!(elapsed = ?start.elapsed(), "statement complete");
                Ok(ret)
            }
            Err(err) => {
                tracing::error!(sql, error = %err, "statement failed");
                Err(err.context(Error::statement_failed(sql)))
            }
        }
    }

    pub(crate) fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows> {
        self.exec(sql, params.len(), |connection| {
            connection.query(sql, params)
        })
    }

    pub(crate) fn execute(
        &mut self,
        sql: &str,
        params: &[Value],
        auto_increment: &[&str],
    ) -> Result<ExecResponse> {
        self.exec(sql, params.len(), |connection| {
            connection.execute(sql, params, auto_increment)
        })
    }

    /// Flushes pending cached writes for the tables a read touches.
    pub(crate) fn flush_tables(&mut self, tables: &[Arc<str>]) -> Result<()> {
        self.entity_cache.flush(&mut *self.connection, tables)
    }

    /// Flushes every pending cached write ahead of a write.
    pub(crate) fn flush_all(&mut self) -> Result<()> {
        self.entity_cache.flush_all(&mut *self.connection)
    }

    pub(crate) fn clear_referrers_cache(&mut self) {
        self.entity_cache.clear_referrers_cache();
    }

    fn serializer(&self) -> Serializer {
        Serializer::new(self.capability(), self.time_zone)
    }

    /// Runs a schema statement.
    pub fn execute_ddl(&mut self, statement: &Statement) -> Result<()> {
        let sql = self.serializer().serialize(statement)?;
        self.exec(&sql, 0, |connection| connection.execute_ddl(&sql))
    }

    /// Creates each table, then each table's indices.
    pub fn create(&mut self, tables: &[&Table]) -> Result<()> {
        for table in tables {
            self.execute_ddl(&Statement::create_table(table))?;
        }

        for table in tables {
            for index in &table.indices {
                self.execute_ddl(&Statement::create_index(table, index))?;
            }
        }

        Ok(())
    }

    /// Drops each table in the given order.
    pub fn drop(&mut self, tables: &[&Table]) -> Result<()> {
        for table in tables {
            self.execute_ddl(&Statement::drop_table(table))?;
        }
        Ok(())
    }
}
