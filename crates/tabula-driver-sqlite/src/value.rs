use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use tabula_core::{stmt::Value as CoreValue, Error};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Bridges core values and SQLite's storage classes.
#[derive(Debug)]
pub struct Value<'a>(std::borrow::Cow<'a, CoreValue>);

impl<'a> From<&'a CoreValue> for Value<'a> {
    fn from(value: &'a CoreValue) -> Self {
        Self(std::borrow::Cow::Borrowed(value))
    }
}

impl Value<'static> {
    /// Converts a column of a SQLite row. Decoding into the column's logical
    /// type happens later, in `ColumnType::value_from_db`.
    pub fn from_sql(value: ValueRef<'_>) -> Self {
        let core_value = match value {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(value) => CoreValue::I64(value),
            ValueRef::Real(value) => CoreValue::F64(value),
            ValueRef::Text(value) => CoreValue::String(String::from_utf8_lossy(value).into_owned()),
            ValueRef::Blob(value) => CoreValue::Bytes(value.to_vec()),
        };

        Value(std::borrow::Cow::Owned(core_value))
    }
}

impl Value<'_> {
    pub fn into_inner(self) -> CoreValue {
        self.0.into_owned()
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use CoreValue as Value;

        let value = match &*self.0 {
            Value::Bool(v) => SqlValue::Integer(i64::from(*v)),
            Value::I16(v) => SqlValue::Integer(i64::from(*v)),
            Value::I32(v) => SqlValue::Integer(i64::from(*v)),
            Value::I64(v) => SqlValue::Integer(*v),
            Value::F32(v) => SqlValue::Real(f64::from(*v)),
            Value::F64(v) => SqlValue::Real(*v),
            Value::Decimal(v) => SqlValue::Text(v.to_string()),
            Value::Char(v) => SqlValue::Text(v.to_string()),
            Value::String(v) => return Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => return Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Date(v) => SqlValue::Text(v.format(DATE_FORMAT).to_string()),
            Value::DateTime(v) => SqlValue::Text(v.format(DATE_TIME_FORMAT).to_string()),
            Value::Enum(v) => SqlValue::Integer(
                i64::try_from(v.ordinal)
                    .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?,
            ),
            Value::Id(v) => SqlValue::Integer(v.value()),
            Value::Null => SqlValue::Null,
            Value::List(_) => {
                return Err(rusqlite::Error::ToSqlConversionFailure(Box::new(
                    Error::type_conversion(self.0.clone().into_owned(), "SQLite parameter"),
                )))
            }
        };

        Ok(ToSqlOutput::Owned(value))
    }
}
