use super::Value;
use crate::schema::ColumnType;

/// A value paired with the column type it is bound to.
///
/// Literals in expressions and arguments registered with a
/// [`QueryBuilder`](super::QueryBuilder) are stored this way so the type
/// decides how the value is rendered or marshalled.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub ty: ColumnType,
    pub value: Value,
}

impl TypedValue {
    pub fn new(ty: ColumnType, value: impl Into<Value>) -> TypedValue {
        TypedValue {
            ty,
            value: value.into(),
        }
    }

    /// Converts the value into the representation bound by the driver.
    pub fn to_db(&self) -> crate::Result<Value> {
        self.ty.value_to_db(&self.value)
    }
}
