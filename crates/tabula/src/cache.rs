use crate::Result;

use std::{fmt::Debug, sync::Arc};
use tabula_core::Connection;

/// A write buffer in front of the database.
///
/// Pending writes for a table must reach the database before that table is
/// read, or the read would not observe them. Reads flush the tables they
/// touch; writes flush everything and then clear the referrers cache.
pub trait EntityCache: Debug + Send + 'static {
    /// Writes pending changes for `tables` through `connection`.
    fn flush(&mut self, connection: &mut dyn Connection, tables: &[Arc<str>]) -> Result<()>;

    /// Writes every pending change.
    fn flush_all(&mut self, connection: &mut dyn Connection) -> Result<()>;

    /// Forgets cached referrer lookups that a write may have invalidated.
    fn clear_referrers_cache(&mut self);
}

/// An entity cache that buffers nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl EntityCache for NoCache {
    fn flush(&mut self, _connection: &mut dyn Connection, _tables: &[Arc<str>]) -> Result<()> {
        Ok(())
    }

    fn flush_all(&mut self, _connection: &mut dyn Connection) -> Result<()> {
        Ok(())
    }

    fn clear_referrers_cache(&mut self) {}
}
