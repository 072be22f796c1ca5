use super::{TypedValue, Value};
use crate::{
    driver::Vendor,
    schema::{ColumnDef, ColumnType},
    Result,
};
use chrono::FixedOffset;

/// Accumulates positional arguments while expressions render themselves.
///
/// A prepared builder replaces every literal with a placeholder and records
/// the `(type, value)` pair; a literal builder inlines the type's SQL literal
/// instead. The order of [`args`](Self::args) is the order placeholders
/// appear in the rendered text.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    vendor: Vendor,

    /// Zone used when formatting date-time literals
    time_zone: FixedOffset,

    prepared: bool,

    args: Vec<TypedValue>,
}

impl QueryBuilder {
    pub fn prepared(vendor: Vendor, time_zone: FixedOffset) -> QueryBuilder {
        QueryBuilder {
            vendor,
            time_zone,
            prepared: true,
            args: vec![],
        }
    }

    pub fn literal(vendor: Vendor, time_zone: FixedOffset) -> QueryBuilder {
        QueryBuilder {
            vendor,
            time_zone,
            prepared: false,
            args: vec![],
        }
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    pub fn time_zone(&self) -> FixedOffset {
        self.time_zone
    }

    /// Registers `value` as an argument of type `ty` and returns the SQL to
    /// splice in its place.
    pub fn register_argument(&mut self, value: Value, ty: &ColumnType) -> Result<String> {
        if self.prepared {
            self.args.push(TypedValue::new(ty.clone(), value));
            Ok(self.vendor.placeholder(self.args.len()).into_owned())
        } else {
            ty.value_to_string(&value, &self.time_zone)
        }
    }

    pub fn args(&self) -> &[TypedValue] {
        &self.args
    }

    /// Arguments converted to the representation bound by the driver.
    pub fn params(&self) -> Result<Vec<Value>> {
        self.args.iter().map(TypedValue::to_db).collect()
    }

    pub fn identity(&self, name: &str) -> String {
        self.vendor.identity(name).into_owned()
    }

    pub fn full_identity(&self, column: &ColumnDef) -> String {
        self.vendor.full_identity(column)
    }
}
