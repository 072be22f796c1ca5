use crate::logging_connection::Statement;
use std::sync::{Arc, Mutex};

/// Read access to the statements recorded by a
/// [`LoggingConnection`](crate::LoggingConnection).
pub struct ExecLog {
    statements: Arc<Mutex<Vec<Statement>>>,
}

impl ExecLog {
    pub fn new(statements: Arc<Mutex<Vec<Statement>>>) -> Self {
        Self { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.lock().unwrap().is_empty()
    }

    /// SQL text of every recorded statement, oldest first
    pub fn sql(&self) -> Vec<String> {
        self.statements
            .lock()
            .unwrap()
            .iter()
            .map(|statement| statement.sql.clone())
            .collect()
    }

    /// SQL text of the most recent statement
    pub fn last_sql(&self) -> Option<String> {
        self.statements
            .lock()
            .unwrap()
            .last()
            .map(|statement| statement.sql.clone())
    }

    pub fn clear(&mut self) {
        self.statements.lock().unwrap().clear();
    }

    /// Remove and return the oldest statement
    pub fn pop(&mut self) -> Option<Statement> {
        let mut statements = self.statements.lock().unwrap();
        if statements.is_empty() {
            None
        } else {
            Some(statements.remove(0))
        }
    }
}
