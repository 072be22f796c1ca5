use super::Session;
use crate::{
    cache::{EntityCache, NoCache},
    Result,
};

use chrono::{FixedOffset, Offset, Utc};
use tabula_core::Connection;

#[derive(Debug)]
pub struct Builder {
    time_zone: FixedOffset,
    selects_for_update: bool,
    entity_cache: Box<dyn EntityCache>,
}

impl Builder {
    /// Zone used to render date-time literals. Defaults to UTC.
    pub fn time_zone(&mut self, time_zone: FixedOffset) -> &mut Self {
        self.time_zone = time_zone;
        self
    }

    /// Whether queries lock the rows they read by default. Only honored
    /// when the database supports `SELECT ... FOR UPDATE`.
    pub fn selects_for_update(&mut self, enabled: bool) -> &mut Self {
        self.selects_for_update = enabled;
        self
    }

    pub fn entity_cache(&mut self, cache: impl EntityCache) -> &mut Self {
        self.entity_cache = Box::new(cache);
        self
    }

    /// Connects to the database at `url`.
    pub fn connect(&mut self, url: &str) -> Result<Session> {
        Ok(self.build_boxed(super::connect(url)?))
    }

    pub fn build(&mut self, connection: impl Connection) -> Session {
        self.build_boxed(Box::new(connection))
    }

    pub fn build_boxed(&mut self, connection: Box<dyn Connection>) -> Session {
        let capability = connection.capability();
        tracing::debug!(
            vendor = ?capability.vendor,
            selects_for_update = self.selects_for_update && capability.select_for_update,
            "session opened"
        );

        Session {
            connection,
            time_zone: self.time_zone,
            selects_for_update: self.selects_for_update,
            entity_cache: std::mem::replace(&mut self.entity_cache, Box::new(NoCache)),
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            time_zone: Utc.fix(),
            selects_for_update: false,
            entity_cache: Box::new(NoCache),
        }
    }
}
