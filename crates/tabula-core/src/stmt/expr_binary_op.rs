use super::{BinaryOp, Expr, QueryBuilder};
use crate::Result;

#[derive(Debug, Clone)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

impl Expr {
    /// Builds `lhs op rhs`.
    ///
    /// Comparing against a NULL literal with `=` or `<>` becomes `IS NULL` /
    /// `IS NOT NULL`, since `x = NULL` is never true in SQL.
    pub fn binary_op(lhs: impl Into<Expr>, op: BinaryOp, rhs: impl Into<Expr>) -> Expr {
        let lhs = lhs.into();
        let rhs = rhs.into();

        if rhs.is_null_value() {
            if op.is_eq() {
                return Expr::is_null(lhs);
            }
            if op.is_ne() {
                return Expr::is_not_null(lhs);
            }
        }

        ExprBinaryOp {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
        .into()
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Ne, rhs)
    }

    pub fn lt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Lt, rhs)
    }

    pub fn le(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Le, rhs)
    }

    pub fn gt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Gt, rhs)
    }

    pub fn ge(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Ge, rhs)
    }

    pub fn like(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Like, rhs)
    }

    pub fn not_like(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::NotLike, rhs)
    }
}

impl ExprBinaryOp {
    pub(super) fn to_sql(&self, builder: &mut QueryBuilder) -> Result<String> {
        let lhs = self.lhs.to_sql(builder)?;
        let rhs = self.rhs.to_sql(builder)?;

        if self.op.is_arithmetic() {
            Ok(format!("({lhs} {} {rhs})", self.op))
        } else {
            Ok(format!("{lhs} {} {rhs}", self.op))
        }
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
