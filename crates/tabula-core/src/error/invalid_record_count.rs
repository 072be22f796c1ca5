use super::Error;

/// Error when a write affected a different number of rows than expected.
#[derive(Debug)]
pub(super) struct InvalidRecordCount {
    message: Box<str>,
}

impl std::error::Error for InvalidRecordCount {}

impl core::fmt::Display for InvalidRecordCount {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid record count: {}", self.message)
    }
}

impl Error {
    pub fn invalid_record_count(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRecordCount(InvalidRecordCount {
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_record_count(&self) -> bool {
        self.any(&|kind| matches!(kind, super::ErrorKind::InvalidRecordCount(_)))
    }
}
