use crate::{
    stmt::{Id, Value, ValueEnum},
    Error, Result,
};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use std::{fmt, str::FromStr, sync::Arc};

/// Rules for one logical SQL type: DDL rendering, literal formatting and
/// conversion to and from driver values.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnType {
    pub ty: Type,

    /// When `false`, rendering a NULL literal of this type is an error.
    pub nullable: bool,

    pub auto_increment: bool,
}

/// The logical SQL types a column can be declared with.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// `INT`, loads as `i32`
    Integer,

    /// `BIGINT`, loads as `i64`
    Long,

    /// `SMALLINT`, loads as `i16`
    Short,

    /// `DECIMAL(scale, precision)`
    Decimal { scale: u32, precision: u32 },

    /// `FLOAT`, loads as `f32`
    Float,

    /// `BIT`, stored as 0/1
    Boolean,

    /// `CHAR`, a single character
    Char,

    /// `VARCHAR(n)` for lengths 1 through 255, unbounded `TEXT` otherwise.
    VarChar {
        length: u32,
        collate: Option<Arc<str>>,
    },

    Blob,

    Date,

    DateTime,

    Timestamp,

    /// Stored as the variant ordinal in an `INT` column
    Enumeration { variants: &'static [&'static str] },

    /// Integer key of a row in `table`
    EntityId { table: Arc<str> },
}

const TEXT_LENGTH: u32 = 65535;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

impl Type {
    pub fn varchar(length: u32) -> Type {
        Type::VarChar {
            length,
            collate: None,
        }
    }

    pub fn text() -> Type {
        Type::varchar(TEXT_LENGTH)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Type::Integer | Type::Long | Type::Short | Type::EntityId { .. }
        )
    }

    /// The DDL spelling of the type.
    pub fn sql_type(&self) -> String {
        match self {
            Type::Integer => "INT".to_string(),
            Type::Long => "BIGINT".to_string(),
            Type::Short => "SMALLINT".to_string(),
            Type::Decimal { scale, precision } => format!("DECIMAL({scale}, {precision})"),
            Type::Float => "FLOAT".to_string(),
            Type::Boolean => "BIT".to_string(),
            Type::Char => "CHAR".to_string(),
            Type::VarChar { length, collate } => {
                let mut ddl = match length {
                    1..=255 => format!("VARCHAR({length})"),
                    _ => "TEXT".to_string(),
                };
                if let Some(collate) = collate {
                    ddl.push_str(" COLLATE ");
                    ddl.push_str(collate);
                }
                ddl
            }
            Type::Blob => "BLOB".to_string(),
            Type::Date => "DATE".to_string(),
            Type::DateTime => "DATETIME".to_string(),
            Type::Timestamp => "TIMESTAMP".to_string(),
            Type::Enumeration { .. } => "INT".to_string(),
            Type::EntityId { .. } => "INT".to_string(),
        }
    }
}

impl ColumnType {
    pub fn new(ty: Type) -> ColumnType {
        ColumnType {
            ty,
            nullable: false,
            auto_increment: false,
        }
    }

    pub fn nullable(mut self) -> ColumnType {
        self.nullable = true;
        self
    }

    pub fn auto_increment(mut self) -> ColumnType {
        self.auto_increment = true;
        self
    }

    pub fn sql_type(&self) -> String {
        self.ty.sql_type()
    }

    fn conversion_error(&self, value: &Value) -> Error {
        Error::type_conversion(value.clone(), self.sql_type())
    }

    /// Converts a logical value into what the driver binds. NULL passes
    /// through untouched.
    pub fn value_to_db(&self, value: &Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let converted = match (&self.ty, value) {
            (Type::Integer, v) => v
                .as_i64()
                .and_then(|i| i32::try_from(i).ok())
                .map(Value::I32),
            (Type::Long, v) => v.as_i64().map(Value::I64),
            (Type::Short, v) => v
                .as_i64()
                .and_then(|i| i16::try_from(i).ok())
                .map(Value::I16),
            (Type::Decimal { .. }, Value::Decimal(d)) => Some(Value::Decimal(*d)),
            (Type::Decimal { .. }, v) => v.as_i64().map(|i| Value::Decimal(Decimal::from(i))),
            (Type::Float, Value::F32(f)) => Some(Value::F32(*f)),
            (Type::Float, Value::F64(f)) => Some(Value::F32(*f as f32)),
            (Type::Boolean, Value::Bool(b)) => Some(Value::Bool(*b)),
            (Type::Char, Value::Char(c)) => Some(Value::Char(*c)),
            (Type::VarChar { .. }, Value::String(s)) => Some(Value::String(s.clone())),
            (Type::VarChar { .. }, Value::Char(c)) => Some(Value::String(c.to_string())),
            (Type::Blob, Value::Bytes(b)) => Some(Value::Bytes(b.clone())),
            (Type::Date, Value::Date(d)) => Some(Value::Date(*d)),
            (Type::Date, Value::DateTime(dt)) => Some(Value::Date(dt.date_naive())),
            (Type::DateTime | Type::Timestamp, Value::DateTime(dt)) => Some(Value::DateTime(*dt)),
            (Type::DateTime | Type::Timestamp, Value::Date(d)) => {
                d.and_hms_opt(0, 0, 0).map(|dt| Value::DateTime(dt.and_utc()))
            }
            // Temporal strings are already in the database's own format
            (Type::Date | Type::DateTime | Type::Timestamp, Value::String(s)) => {
                Some(Value::String(s.clone()))
            }
            (Type::Enumeration { .. }, Value::Enum(e)) => {
                i32::try_from(e.ordinal).ok().map(Value::I32)
            }
            (Type::Enumeration { .. }, v) => v
                .as_i64()
                .and_then(|i| i32::try_from(i).ok())
                .map(Value::I32),
            (Type::EntityId { .. }, Value::Id(id)) => Some(Value::I64(id.value())),
            (Type::EntityId { .. }, v) => v.as_i64().map(Value::I64),
            _ => None,
        };

        converted.ok_or_else(|| self.conversion_error(value))
    }

    /// Converts a value returned by the driver into the logical value for
    /// this type.
    pub fn value_from_db(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let converted = match (&self.ty, &value) {
            (Type::Integer, Value::Bool(b)) => Some(Value::I32(i32::from(*b))),
            (Type::Integer, v) => v
                .as_i64()
                .and_then(|i| i32::try_from(i).ok())
                .map(Value::I32),
            (Type::Long, v) => v.as_i64().map(Value::I64),
            (Type::Short, v) => v
                .as_i64()
                .and_then(|i| i16::try_from(i).ok())
                .map(Value::I16),
            (Type::Decimal { .. }, Value::Decimal(d)) => Some(Value::Decimal(*d)),
            (Type::Decimal { .. }, Value::F64(f)) => Decimal::try_from(*f).ok().map(Value::Decimal),
            (Type::Decimal { .. }, Value::F32(f)) => Decimal::try_from(*f).ok().map(Value::Decimal),
            (Type::Decimal { .. }, Value::String(s)) => {
                Decimal::from_str(s).ok().map(Value::Decimal)
            }
            (Type::Decimal { .. }, v) => v.as_i64().map(|i| Value::Decimal(Decimal::from(i))),
            (Type::Float, Value::F32(f)) => Some(Value::F32(*f)),
            (Type::Float, Value::F64(f)) => Some(Value::F32(*f as f32)),
            (Type::Float, v) => v.as_i64().map(|i| Value::F32(i as f32)),
            (Type::Boolean, Value::Bool(b)) => Some(Value::Bool(*b)),
            (Type::Boolean, Value::F32(f)) => Some(Value::Bool(*f != 0.0)),
            (Type::Boolean, Value::F64(f)) => Some(Value::Bool(*f != 0.0)),
            (Type::Boolean, v) => v.as_i64().map(|i| Value::Bool(i != 0)),
            (Type::Char, Value::Char(c)) => Some(Value::Char(*c)),
            (Type::Char, Value::String(s)) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Value::Char(c)),
                    _ => None,
                }
            }
            (Type::Char, v) => v
                .as_i64()
                .and_then(|i| u32::try_from(i).ok())
                .and_then(char::from_u32)
                .map(Value::Char),
            (Type::VarChar { .. }, Value::String(s)) => Some(Value::String(s.clone())),
            (Type::VarChar { .. }, Value::Char(c)) => Some(Value::String(c.to_string())),
            (Type::Blob, Value::Bytes(b)) => Some(Value::Bytes(b.clone())),
            (Type::Blob, Value::String(s)) => Some(Value::Bytes(s.clone().into_bytes())),
            (Type::Date, Value::Date(d)) => Some(Value::Date(*d)),
            (Type::Date, Value::DateTime(dt)) => Some(Value::Date(dt.date_naive())),
            (Type::Date, Value::String(s)) => parse_date(s).map(Value::Date),
            (Type::DateTime | Type::Timestamp, Value::DateTime(dt)) => Some(Value::DateTime(*dt)),
            (Type::DateTime | Type::Timestamp, Value::Date(d)) => {
                d.and_hms_opt(0, 0, 0).map(|dt| Value::DateTime(dt.and_utc()))
            }
            (Type::DateTime | Type::Timestamp, Value::String(s)) => {
                parse_date_time(s).map(Value::DateTime)
            }
            (Type::DateTime | Type::Timestamp, Value::I64(secs)) => {
                DateTime::<Utc>::from_timestamp(*secs, 0).map(Value::DateTime)
            }
            (Type::Enumeration { .. }, Value::Enum(e)) => Some(Value::Enum(*e)),
            (Type::Enumeration { variants }, v) => v
                .as_i64()
                .and_then(|i| usize::try_from(i).ok())
                .and_then(|ordinal| ValueEnum::from_ordinal(variants, ordinal))
                .map(Value::Enum),
            (Type::EntityId { .. }, Value::Id(id)) => Some(Value::Id(id.clone())),
            (Type::EntityId { table }, v) => v.as_i64().map(|i| Value::Id(Id::new(table.clone(), i))),
            _ => None,
        };

        converted.ok_or_else(|| self.conversion_error(&value))
    }

    /// Renders `value` as an SQL literal of this type.
    pub fn value_to_string(&self, value: &Value, time_zone: &FixedOffset) -> Result<String> {
        match value {
            Value::Null => {
                if !self.nullable {
                    return Err(Error::invalid_statement(format!(
                        "NULL in non-nullable column of type {}",
                        self.sql_type()
                    )));
                }
                Ok("NULL".to_string())
            }
            Value::List(items) => {
                let items = items
                    .iter()
                    .map(|item| self.value_to_string(item, time_zone))
                    .collect::<Result<Vec<_>>>()?;
                Ok(items.join(","))
            }
            value => self.non_null_value_to_string(value, time_zone),
        }
    }

    fn non_null_value_to_string(&self, value: &Value, time_zone: &FixedOffset) -> Result<String> {
        match (&self.ty, value) {
            (Type::VarChar { .. } | Type::Char, value) => {
                Ok(quote(&self.value_to_db(value)?.to_string()))
            }
            (Type::Boolean, value) => match self.value_to_db(value)? {
                Value::Bool(true) => Ok("1".to_string()),
                _ => Ok("0".to_string()),
            },
            (Type::Blob, value) => match self.value_to_db(value)? {
                Value::Bytes(bytes) => Ok(format!("X'{}'", hex::encode_upper(bytes))),
                _ => Err(self.conversion_error(value)),
            },
            (Type::Date | Type::DateTime | Type::Timestamp, Value::String(s)) => Ok(s.clone()),
            (Type::Date, value) => match self.value_to_db(value)? {
                Value::Date(d) => Ok(format!("'{}'", d.format(DATE_FORMAT))),
                _ => Err(self.conversion_error(value)),
            },
            (Type::DateTime | Type::Timestamp, value) => match self.value_to_db(value)? {
                Value::DateTime(dt) => Ok(format!(
                    "'{}'",
                    dt.with_timezone(time_zone).format(DATE_TIME_FORMAT)
                )),
                _ => Err(self.conversion_error(value)),
            },
            (_, value) => Ok(self.value_to_db(value)?.to_string()),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql_type())
    }
}

/// Quotes `s` as a string literal. Single quotes are doubled; CR and LF
/// become `\r` and `\n`.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("''"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .or_else(|| parse_date_time(s).map(|dt| dt.date_naive()))
}

fn parse_date_time(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|dt| dt.and_utc())
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
}
