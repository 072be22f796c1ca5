use super::{IntoExpr, Primitive};

use rust_decimal::Decimal;
use std::{
    fmt,
    marker::PhantomData,
    ops::{Add, Div, Mul, Not, Sub},
};
use tabula_core::{
    schema::{ColumnType, Type},
    stmt,
};

/// An expression evaluating to a value of type `T`.
pub struct Expr<T> {
    /// The un-typed expression
    pub(crate) untyped: stmt::Expr,

    /// `T` is the type of the expression
    _p: PhantomData<T>,
}

impl<T> Expr<T> {
    pub fn from_untyped(untyped: impl Into<stmt::Expr>) -> Self {
        Self {
            untyped: untyped.into(),
            _p: PhantomData,
        }
    }

    /// A literal bound to `ty`.
    pub fn value(ty: ColumnType, value: T) -> Self
    where
        T: Primitive,
    {
        Self::from_untyped(stmt::Expr::value(ty, value.into_value()))
    }

    pub fn cast<U>(self) -> Expr<U> {
        Expr::from_untyped(self.untyped)
    }

    pub fn untyped(&self) -> &stmt::Expr {
        &self.untyped
    }

    pub fn into_untyped(self) -> stmt::Expr {
        self.untyped
    }

    pub fn column_type(&self) -> ColumnType {
        self.untyped.column_type()
    }

    fn operand(&self, rhs: impl IntoExpr<T>) -> stmt::Expr {
        rhs.into_expr(&self.column_type()).untyped
    }

    pub fn eq(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        let rhs = self.operand(rhs);
        Expr::from_untyped(stmt::Expr::eq(self.untyped, rhs))
    }

    pub fn ne(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        let rhs = self.operand(rhs);
        Expr::from_untyped(stmt::Expr::ne(self.untyped, rhs))
    }

    pub fn lt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        let rhs = self.operand(rhs);
        Expr::from_untyped(stmt::Expr::lt(self.untyped, rhs))
    }

    pub fn le(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        let rhs = self.operand(rhs);
        Expr::from_untyped(stmt::Expr::le(self.untyped, rhs))
    }

    pub fn gt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        let rhs = self.operand(rhs);
        Expr::from_untyped(stmt::Expr::gt(self.untyped, rhs))
    }

    pub fn ge(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        let rhs = self.operand(rhs);
        Expr::from_untyped(stmt::Expr::ge(self.untyped, rhs))
    }

    /// `self LIKE pattern`. The pattern is always bound as text.
    pub fn like(self, pattern: impl Into<String>) -> Expr<bool> {
        let pattern = stmt::Expr::value(ColumnType::new(Type::text()), pattern.into());
        Expr::from_untyped(stmt::Expr::like(self.untyped, pattern))
    }

    pub fn not_like(self, pattern: impl Into<String>) -> Expr<bool> {
        let pattern = stmt::Expr::value(ColumnType::new(Type::text()), pattern.into());
        Expr::from_untyped(stmt::Expr::not_like(self.untyped, pattern))
    }

    pub fn in_list(self, values: impl IntoIterator<Item = T>) -> Expr<bool>
    where
        T: Primitive,
    {
        Expr::from_untyped(stmt::Expr::in_list(
            self.untyped,
            values.into_iter().map(Primitive::into_value),
        ))
    }

    pub fn count(self) -> Expr<i64> {
        Expr::from_untyped(stmt::Expr::count(self.untyped))
    }

    pub fn count_distinct(self) -> Expr<i64> {
        Expr::from_untyped(stmt::Expr::count_distinct(self.untyped))
    }

    pub fn sum(self) -> Expr<T::Nullable>
    where
        T: Primitive,
    {
        Expr::from_untyped(stmt::Expr::sum(self.untyped))
    }

    pub fn min(self) -> Expr<T::Nullable>
    where
        T: Primitive,
    {
        Expr::from_untyped(stmt::Expr::min(self.untyped))
    }

    pub fn max(self) -> Expr<T::Nullable>
    where
        T: Primitive,
    {
        Expr::from_untyped(stmt::Expr::max(self.untyped))
    }

    pub fn avg(self) -> Expr<Option<Decimal>> {
        Expr::from_untyped(stmt::Expr::avg(self.untyped))
    }
}

impl<T> Expr<Option<T>> {
    pub fn is_null(self) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::is_null(self.untyped))
    }

    pub fn is_not_null(self) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::is_not_null(self.untyped))
    }
}

impl Expr<bool> {
    pub fn and(self, rhs: impl IntoExpr<bool>) -> Self {
        let rhs = self.operand(rhs);
        Self::from_untyped(stmt::Expr::and(self.untyped, rhs))
    }

    /// ANDs every expression; `None` when `exprs` is empty.
    pub fn and_all<E>(exprs: impl IntoIterator<Item = E>) -> Option<Self>
    where
        E: IntoExpr<bool>,
    {
        let ty = ColumnType::new(Type::Boolean);
        exprs
            .into_iter()
            .map(|expr| expr.into_expr(&ty).untyped)
            .reduce(stmt::Expr::and)
            .map(Self::from_untyped)
    }

    pub fn or(self, rhs: impl IntoExpr<bool>) -> Self {
        let rhs = self.operand(rhs);
        Self::from_untyped(stmt::Expr::or(self.untyped, rhs))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        !self
    }
}

impl Not for Expr<bool> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_untyped(stmt::Expr::not(self.untyped))
    }
}

macro_rules! impl_arithmetic {
    ( $( $trait:ident, $method:ident ;)* ) => {
        $(
            impl<T, R: IntoExpr<T>> $trait<R> for Expr<T> {
                type Output = Expr<T>;

                fn $method(self, rhs: R) -> Expr<T> {
                    let rhs = self.operand(rhs);
                    Expr::from_untyped(stmt::Expr::$method(self.untyped, rhs))
                }
            }
        )*
    };
}

impl_arithmetic! {
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
}

impl<T> Clone for Expr<T> {
    fn clone(&self) -> Self {
        Self::from_untyped(self.untyped.clone())
    }
}

impl<T> fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.untyped, f)
    }
}

impl<T> From<Expr<T>> for stmt::Expr {
    fn from(value: Expr<T>) -> Self {
        value.untyped
    }
}
