use std::sync::{Arc, Mutex};
use tabula_core::{
    driver::{Capability, Connection, ExecResponse, Rows},
    stmt::Value,
    Result,
};

/// A statement sent through a [`LoggingConnection`].
#[derive(Debug, Clone)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

/// A connection wrapper that records every statement for assertions.
#[derive(Debug)]
pub struct LoggingConnection {
    /// The connection that actually runs statements
    inner: Box<dyn Connection>,

    /// Shared with the test through [`log_handle`](Self::log_handle)
    log: Arc<Mutex<Vec<Statement>>>,
}

impl LoggingConnection {
    pub fn new(inner: Box<dyn Connection>) -> Self {
        Self {
            inner,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn log_handle(&self) -> Arc<Mutex<Vec<Statement>>> {
        self.log.clone()
    }

    fn record(&self, sql: &str, params: &[Value]) {
        self.log
            .lock()
            .expect("Failed to acquire statement log lock")
            .push(Statement {
                sql: sql.to_string(),
                params: params.to_vec(),
            });
    }
}

impl Connection for LoggingConnection {
    fn capability(&self) -> &'static Capability {
        self.inner.capability()
    }

    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows> {
        self.record(sql, params);
        self.inner.query(sql, params)
    }

    fn execute(
        &mut self,
        sql: &str,
        params: &[Value],
        auto_increment: &[&str],
    ) -> Result<ExecResponse> {
        self.record(sql, params);
        self.inner.execute(sql, params, auto_increment)
    }

    fn query_batch(&mut self, statements: &[(String, Vec<Value>)]) -> Result<Vec<Rows>> {
        for (sql, params) in statements {
            self.record(sql, params);
        }
        self.inner.query_batch(statements)
    }

    fn execute_ddl(&mut self, sql: &str) -> Result<()> {
        self.record(sql, &[]);
        self.inner.execute_ddl(sql)
    }
}
