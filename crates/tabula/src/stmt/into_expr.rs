use super::{Expr, Primitive};
use crate::Column;

use tabula_core::{schema::ColumnType, stmt};

/// Converts an operand into an expression of type `T`.
///
/// `ty` is the column type of the other side of the comparison or
/// assignment. Literal operands are bound to it so they render and marshal
/// the way that column does.
pub trait IntoExpr<T> {
    fn into_expr(self, ty: &ColumnType) -> Expr<T>;
}

impl<T> IntoExpr<T> for Expr<T> {
    fn into_expr(self, _ty: &ColumnType) -> Expr<T> {
        self
    }
}

impl<T> IntoExpr<T> for &Expr<T> {
    fn into_expr(self, _ty: &ColumnType) -> Expr<T> {
        self.clone()
    }
}

impl<T> IntoExpr<Option<T>> for Expr<T> {
    fn into_expr(self, _ty: &ColumnType) -> Expr<Option<T>> {
        self.cast()
    }
}

impl<T> IntoExpr<T> for &Column<T> {
    fn into_expr(self, _ty: &ColumnType) -> Expr<T> {
        self.expr()
    }
}

impl<T> IntoExpr<Option<T>> for &Column<T> {
    fn into_expr(self, _ty: &ColumnType) -> Expr<Option<T>> {
        self.expr().cast()
    }
}

impl<T: Primitive> IntoExpr<T> for T {
    fn into_expr(self, ty: &ColumnType) -> Expr<T> {
        Expr::value(ty.clone(), self)
    }
}

impl<T: Primitive> IntoExpr<Option<T>> for T {
    fn into_expr(self, ty: &ColumnType) -> Expr<Option<T>> {
        Expr::value(ty.clone(), Some(self))
    }
}

impl IntoExpr<String> for &str {
    fn into_expr(self, ty: &ColumnType) -> Expr<String> {
        Expr::value(ty.clone(), self.to_string())
    }
}

impl IntoExpr<Option<String>> for &str {
    fn into_expr(self, ty: &ColumnType) -> Expr<Option<String>> {
        Expr::value(ty.clone(), Some(self.to_string()))
    }
}

/// Something that can be projected by a query, grouped or ordered by, and
/// looked up in a [`ResultRow`](crate::ResultRow).
pub trait Projection {
    fn to_untyped(&self) -> stmt::Expr;
}

/// A [`Projection`] whose values load as `T`.
pub trait Field<T>: Projection {}

impl<T> Projection for Expr<T> {
    fn to_untyped(&self) -> stmt::Expr {
        self.untyped.clone()
    }
}

impl<T> Field<T> for Expr<T> {}

impl<T> Projection for Column<T> {
    fn to_untyped(&self) -> stmt::Expr {
        stmt::Expr::column(self.def())
    }
}

impl<T> Field<T> for Column<T> {}
