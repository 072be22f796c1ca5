use crate::Result;

use tabula_core::{
    stmt::{Value, ValueEnum},
    Error,
};

/// A Rust enum stored in an `enumeration` column by variant ordinal.
///
/// Implemented by the [`db_enum!`](crate::db_enum) macro.
pub trait DbEnum: Sized + Copy + 'static {
    /// Variant names in declaration order
    const VARIANTS: &'static [&'static str];

    fn ordinal(self) -> usize;

    fn from_ordinal(ordinal: usize) -> Option<Self>;
}

/// Loads an enum from either an enum value or a raw ordinal.
pub fn load_enum<E: DbEnum>(value: Value) -> Result<E> {
    let ordinal = match &value {
        Value::Enum(e) => Some(e.ordinal),
        v => v.as_i64().and_then(|i| usize::try_from(i).ok()),
    };

    ordinal
        .and_then(E::from_ordinal)
        .ok_or_else(|| Error::type_conversion(value, std::any::type_name::<E>()))
}

pub fn enum_value<E: DbEnum>(value: E) -> Value {
    ValueEnum::from_ordinal(E::VARIANTS, value.ordinal())
        .map(Value::Enum)
        .unwrap_or_default()
}

/// Declares a field-less enum that can be stored in an `enumeration` column.
///
/// The macro derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`.
///
/// ```
/// tabula::db_enum! {
///     pub enum Status { Active, Suspended }
/// }
/// ```
#[macro_export]
macro_rules! db_enum {
    (
        $( #[$attr:meta] )*
        $vis:vis enum $name:ident {
            $( $variant:ident ),* $(,)?
        }
    ) => {
        $( #[$attr] )*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $variant ),*
        }

        impl $crate::codegen_support::DbEnum for $name {
            const VARIANTS: &'static [&'static str] = &[ $( stringify!($variant) ),* ];

            fn ordinal(self) -> usize {
                self as usize
            }

            fn from_ordinal(ordinal: usize) -> Option<Self> {
                const ALL: &[$name] = &[ $( $name::$variant ),* ];
                ALL.get(ordinal).copied()
            }
        }

        impl $crate::codegen_support::Primitive for $name {
            type Nullable = Option<$name>;

            fn load(
                value: $crate::codegen_support::Value,
            ) -> $crate::codegen_support::Result<Self> {
                $crate::codegen_support::load_enum(value)
            }

            fn into_value(self) -> $crate::codegen_support::Value {
                $crate::codegen_support::enum_value(self)
            }
        }
    };
}
