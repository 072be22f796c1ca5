use super::Primitive;
use crate::Result;

use chrono::{DateTime, NaiveDate, Utc};
use tabula_core::{stmt::Value, Error};

impl Primitive for NaiveDate {
    type Nullable = Option<NaiveDate>;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Date(v) => Ok(v),
            Value::DateTime(v) => Ok(v.date_naive()),
            value => Err(Error::type_conversion(value, "NaiveDate")),
        }
    }

    fn into_value(self) -> Value {
        Value::Date(self)
    }
}

impl Primitive for DateTime<Utc> {
    type Nullable = Option<DateTime<Utc>>;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::DateTime(v) => Ok(v),
            value => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }

    fn into_value(self) -> Value {
        Value::DateTime(self)
    }
}
