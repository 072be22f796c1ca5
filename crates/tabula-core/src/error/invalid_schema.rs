use super::Error;

/// Error when a table or join definition is invalid.
///
/// This occurs when:
/// - Two tables are joined without a foreign key between them
/// - A join names no columns and no relationship can be inferred
/// - A column is declared twice on the same table
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        self.any(&|kind| matches!(kind, super::ErrorKind::InvalidSchema(_)))
    }
}
