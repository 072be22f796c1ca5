use crate::stmt::Value;
use std::collections::VecDeque;

/// Rows returned by a query, consumed front to back.
#[derive(Debug, Default)]
pub struct Rows {
    rows: VecDeque<Vec<Value>>,
}

/// Outcome of a statement that returns no rows.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExecResponse {
    /// Number of rows affected
    pub count: u64,

    /// Keys generated for auto-increment columns, in insertion order
    pub generated_keys: Vec<i64>,
}

impl Rows {
    pub fn new(rows: Vec<Vec<Value>>) -> Rows {
        Rows { rows: rows.into() }
    }

    /// Takes the next row, or `None` once the rows are exhausted.
    pub fn next_row(&mut self) -> Option<Vec<Value>> {
        self.rows.pop_front()
    }

    pub fn has_next(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Number of rows not yet taken
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Vec<Value>>> for Rows {
    fn from(value: Vec<Vec<Value>>) -> Self {
        Rows::new(value)
    }
}

impl ExecResponse {
    pub fn count(count: u64) -> ExecResponse {
        ExecResponse {
            count,
            generated_keys: vec![],
        }
    }
}
