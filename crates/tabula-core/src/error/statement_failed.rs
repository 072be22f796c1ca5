use super::Error;

/// Context attached to a failure while executing a statement.
///
/// Carries the SQL text so the caller can see exactly what was sent.
#[derive(Debug)]
pub(super) struct StatementFailed {
    sql: Box<str>,
}

impl std::error::Error for StatementFailed {}

impl core::fmt::Display for StatementFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "statement failed: {}", self.sql)
    }
}

impl Error {
    /// Creates a statement failure carrying the offending SQL.
    ///
    /// Usually attached with [`Error::context`] on top of a driver error.
    pub fn statement_failed(sql: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::StatementFailed(StatementFailed {
            sql: sql.into().into(),
        }))
    }

    /// Returns `true` if this error is a statement failure.
    pub fn is_statement_failed(&self) -> bool {
        self.any(&|kind| matches!(kind, super::ErrorKind::StatementFailed(_)))
    }

    /// Returns the SQL of the failed statement, if any.
    pub fn sql(&self) -> Option<&str> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::StatementFailed(failed) => Some(&*failed.sql),
            _ => None,
        })
    }
}
