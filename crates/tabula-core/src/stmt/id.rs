use super::Value;
use std::{fmt, sync::Arc};

/// Identifier of a row in a table with an integer surrogate key.
///
/// Entity-reference columns decode into `Id` so the referenced table travels
/// with the key.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct Id {
    /// The table the identifier belongs to.
    table: Arc<str>,

    value: i64,
}

impl Id {
    pub fn new(table: impl Into<Arc<str>>, value: i64) -> Id {
        Id {
            table: table.into(),
            value,
        }
    }

    /// The table this identifier refers to
    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Value {
    pub const fn is_id(&self) -> bool {
        matches!(self, Self::Id(_))
    }
}

impl From<Id> for Value {
    fn from(value: Id) -> Self {
        Self::Id(value)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({}#{})", self.table, self.value)
    }
}
