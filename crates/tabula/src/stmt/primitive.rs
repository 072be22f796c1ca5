use crate::Result;

use rust_decimal::Decimal;
use tabula_core::{
    stmt::{Id, Value},
    Error,
};

/// A Rust type a column loads into and binds from.
///
/// `load` receives the logical value produced by the column's
/// [`ColumnType`](tabula_core::schema::ColumnType), never a raw driver value.
pub trait Primitive: Sized {
    /// The type the same column loads into once it is declared nullable.
    type Nullable: Primitive;

    fn load(value: Value) -> Result<Self>;

    fn into_value(self) -> Value;
}

macro_rules! impl_primitive {
    ( $( $var:ident($t:ty) ;)* ) => {
        $(
            impl Primitive for $t {
                type Nullable = Option<$t>;

                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::$var(v) => Ok(v),
                        value => Err(Error::type_conversion(value, stringify!($t))),
                    }
                }

                fn into_value(self) -> Value {
                    Value::$var(self)
                }
            }
        )*
    };
}

impl_primitive! {
    Bool(bool);
    I16(i16);
    I32(i32);
    I64(i64);
    F32(f32);
    Decimal(Decimal);
    Char(char);
    String(String);
    Bytes(Vec<u8>);
    Id(Id);
}

impl<T: Primitive> Primitive for Option<T> {
    type Nullable = Self;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::load(value).map(Some),
        }
    }

    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }
}
