use super::Fields;
use crate::{
    stmt::{Field, Primitive, Projection},
    Result,
};

use std::{fmt, sync::Arc};
use tabula_core::{schema::ColumnType, stmt::Value, Error};

/// One row of a result set.
///
/// Values are stored as returned by the driver and decoded through the
/// projected expression's column type on access.
#[derive(Debug, Clone)]
pub struct ResultRow {
    fields: Arc<Fields>,
    data: Vec<Value>,
}

impl ResultRow {
    pub(crate) fn new(fields: Arc<Fields>, mut data: Vec<Value>) -> ResultRow {
        data.resize(fields.len(), Value::Null);
        ResultRow { fields, data }
    }

    /// Reads `field`.
    ///
    /// Fails if `field` was not projected, or if its value does not load as
    /// `T`. A NULL only loads into an `Option`; use
    /// [`try_get`](Self::try_get) where a non-nullable column can still come
    /// back NULL, as on the outer side of a join.
    pub fn get<T: Primitive>(&self, field: &impl Field<T>) -> Result<T> {
        let (index, ty) = self.slot(field)?;
        let value = ty.value_from_db(self.data[index].clone())?;
        T::load(value)
    }

    /// Reads `field`, or `None` if it was not projected or is NULL.
    pub fn try_get<T: Primitive>(&self, field: &impl Field<T>) -> Result<Option<T>> {
        if self.has_value(field) {
            self.get(field).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Returns `true` if `field` was projected and is not NULL.
    pub fn has_value(&self, field: &dyn Projection) -> bool {
        self.slot(field)
            .is_ok_and(|(index, _)| !self.data[index].is_null())
    }

    /// Returns `true` if `field` was projected.
    pub fn contains(&self, field: &dyn Projection) -> bool {
        self.slot(field).is_ok()
    }

    /// Overwrites the value of a projected `field`.
    pub fn set<T: Primitive>(&mut self, field: &impl Field<T>, value: T) -> Result<()> {
        let (index, _) = self.slot(field)?;
        self.data[index] = value.into_value();
        Ok(())
    }

    /// Overwrites the value projected for `expr`, given as a driver value.
    pub(crate) fn set_value(&mut self, expr: &tabula_core::stmt::Expr, value: Value) -> Result<()> {
        let (index, _) = self.slot_of(expr)?;
        self.data[index] = value;
        Ok(())
    }

    /// Values in slot order
    pub fn values(&self) -> &[Value] {
        &self.data
    }

    fn slot(&self, field: &dyn Projection) -> Result<(usize, &ColumnType)> {
        self.slot_of(&field.to_untyped())
    }

    fn slot_of(&self, expr: &tabula_core::stmt::Expr) -> Result<(usize, &ColumnType)> {
        let key = self.fields.key(expr)?;
        self.fields
            .slot(&key)
            .ok_or_else(|| Error::invalid_statement(format!("{key} is not in record set")))
    }
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for (key, value) in self.fields.keys().zip(&self.data) {
            write!(f, "{s}{key}={value}")?;
            s = ", ";
        }
        Ok(())
    }
}
