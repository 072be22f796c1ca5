use super::Value;

/// A value of an enumerated type, stored in the database by ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueEnum {
    /// Position of the variant in its declaration order
    pub ordinal: usize,

    /// Variant name, used when displaying the value
    pub name: &'static str,
}

impl ValueEnum {
    /// Resolve an ordinal against an ordered list of variant names.
    pub fn from_ordinal(variants: &'static [&'static str], ordinal: usize) -> Option<ValueEnum> {
        variants
            .get(ordinal)
            .map(|name| ValueEnum { ordinal, name })
    }
}

impl From<ValueEnum> for Value {
    fn from(value: ValueEnum) -> Self {
        Self::Enum(value)
    }
}
