use crate::stmt::{Expr, IntoExpr, Primitive};

use rust_decimal::Decimal;
use std::{fmt, marker::PhantomData, sync::Arc};
use tabula_core::{
    schema::{ColumnDef, ColumnType},
    stmt,
};

/// A typed handle to a declared column.
///
/// Obtained from [`ColumnBuilder::add`](super::ColumnBuilder::add). The
/// handle shares its descriptor with the owning [`Table`](super::Table).
pub struct Column<T> {
    def: Arc<ColumnDef>,
    _p: PhantomData<T>,
}

impl<T> Column<T> {
    pub(crate) fn new(def: Arc<ColumnDef>) -> Column<T> {
        Column {
            def,
            _p: PhantomData,
        }
    }

    pub fn def(&self) -> &Arc<ColumnDef> {
        &self.def
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn table_name(&self) -> &str {
        &self.def.table
    }

    pub fn column_type(&self) -> &ColumnType {
        &self.def.column_type
    }

    pub fn expr(&self) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::column(&self.def))
    }

    pub fn eq(&self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.expr().eq(rhs)
    }

    pub fn ne(&self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.expr().ne(rhs)
    }

    pub fn lt(&self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.expr().lt(rhs)
    }

    pub fn le(&self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.expr().le(rhs)
    }

    pub fn gt(&self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.expr().gt(rhs)
    }

    pub fn ge(&self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        self.expr().ge(rhs)
    }

    pub fn like(&self, pattern: impl Into<String>) -> Expr<bool> {
        self.expr().like(pattern)
    }

    pub fn not_like(&self, pattern: impl Into<String>) -> Expr<bool> {
        self.expr().not_like(pattern)
    }

    pub fn in_list(&self, values: impl IntoIterator<Item = T>) -> Expr<bool>
    where
        T: Primitive,
    {
        self.expr().in_list(values)
    }

    pub fn count(&self) -> Expr<i64> {
        self.expr().count()
    }

    pub fn count_distinct(&self) -> Expr<i64> {
        self.expr().count_distinct()
    }

    pub fn sum(&self) -> Expr<T::Nullable>
    where
        T: Primitive,
    {
        self.expr().sum()
    }

    pub fn min(&self) -> Expr<T::Nullable>
    where
        T: Primitive,
    {
        self.expr().min()
    }

    pub fn max(&self) -> Expr<T::Nullable>
    where
        T: Primitive,
    {
        self.expr().max()
    }

    pub fn avg(&self) -> Expr<Option<Decimal>> {
        self.expr().avg()
    }
}

impl<T> Column<Option<T>> {
    pub fn is_null(&self) -> Expr<bool> {
        self.expr().is_null()
    }

    pub fn is_not_null(&self) -> Expr<bool> {
        self.expr().is_not_null()
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Column::new(self.def.clone())
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Column({}.{})", self.def.table, self.def.name)
    }
}

impl<T> From<&Column<T>> for Expr<T> {
    fn from(value: &Column<T>) -> Self {
        value.expr()
    }
}
