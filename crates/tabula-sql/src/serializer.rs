#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

// Fragment serializers
mod column_def;
mod statement;

use crate::stmt::Statement;

use chrono::{FixedOffset, Offset, Utc};
use tabula_core::{
    driver::{Capability, Vendor},
    Error, Result,
};

/// Serialize a schema statement to a SQL string
#[derive(Debug)]
pub struct Serializer {
    /// The connected database, which decides quoting and auto-increment
    /// spelling.
    capability: &'static Capability,

    /// Zone used to render date-time column defaults
    time_zone: FixedOffset,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// First failure hit while rendering a fragment
    error: Option<Error>,
}

impl Serializer {
    pub fn new(capability: &'static Capability, time_zone: FixedOffset) -> Serializer {
        Serializer {
            capability,
            time_zone,
        }
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(&Capability::SQLITE, Utc.fix())
    }

    pub fn mysql() -> Serializer {
        Serializer::new(&Capability::MYSQL, Utc.fix())
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(&Capability::POSTGRESQL, Utc.fix())
    }

    pub fn serialize(&self, stmt: &Statement) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            error: None,
        };

        stmt.to_sql(&mut fmt);

        match fmt.error {
            Some(err) => Err(err),
            None => Ok(ret),
        }
    }

    fn vendor(&self) -> Vendor {
        self.capability.vendor
    }
}

impl Formatter<'_> {
    fn fail(&mut self, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}
