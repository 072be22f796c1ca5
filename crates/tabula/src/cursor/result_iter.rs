use super::{Fields, ResultRow};
use crate::Result;

use std::sync::Arc;
use tabula_core::{driver::Rows, Error};

/// A single-pass cursor over the rows of an executed query.
#[derive(Debug)]
pub struct ResultIter {
    rows: Rows,
    fields: Arc<Fields>,
}

impl ResultIter {
    pub(crate) fn new(rows: Rows, fields: Arc<Fields>) -> ResultIter {
        ResultIter { rows, fields }
    }

    /// Returns `true` if another row is available. Does not advance.
    pub fn has_next(&self) -> bool {
        self.rows.has_next()
    }

    /// Takes the next row, failing once the cursor is exhausted.
    pub fn next_row(&mut self) -> Result<ResultRow> {
        self.next()
            .ok_or_else(|| Error::record_not_found("result set is exhausted"))
    }
}

impl Iterator for ResultIter {
    type Item = ResultRow;

    fn next(&mut self) -> Option<ResultRow> {
        let data = self.rows.next_row()?;
        Some(ResultRow::new(self.fields.clone(), data))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rows.len(), Some(self.rows.len()))
    }
}

impl ExactSizeIterator for ResultIter {}
