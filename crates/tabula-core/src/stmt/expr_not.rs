use super::{Expr, QueryBuilder};
use crate::Result;

#[derive(Debug, Clone)]
pub struct ExprNot {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn not(expr: impl Into<Expr>) -> Expr {
        ExprNot {
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl ExprNot {
    pub(super) fn to_sql(&self, builder: &mut QueryBuilder) -> Result<String> {
        Ok(format!("NOT ({})", self.expr.to_sql(builder)?))
    }
}

impl From<ExprNot> for Expr {
    fn from(value: ExprNot) -> Self {
        Self::Not(value)
    }
}
