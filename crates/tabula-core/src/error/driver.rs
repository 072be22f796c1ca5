use super::Error;

/// Error raised by the underlying database connection.
///
/// Wraps whatever the driver library returned (rusqlite, I/O, ...). The
/// statement that triggered it is attached separately with
/// [`Error::statement_failed`].
#[derive(Debug)]
pub(super) struct DriverError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a driver failure.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if a driver failure is anywhere in the context chain.
    pub fn is_driver(&self) -> bool {
        self.any(&|kind| matches!(kind, super::ErrorKind::Driver(_)))
    }
}
