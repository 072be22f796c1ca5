use super::{Expr, QueryBuilder};
use crate::Result;

#[derive(Debug, Clone)]
pub struct ExprIsNull {
    /// When true, renders `IS NOT NULL`
    pub negate: bool,

    pub expr: Box<Expr>,
}

impl Expr {
    pub fn is_null(expr: impl Into<Expr>) -> Expr {
        ExprIsNull {
            negate: false,
            expr: Box::new(expr.into()),
        }
        .into()
    }

    pub fn is_not_null(expr: impl Into<Expr>) -> Expr {
        ExprIsNull {
            negate: true,
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl ExprIsNull {
    pub(super) fn to_sql(&self, builder: &mut QueryBuilder) -> Result<String> {
        let expr = self.expr.to_sql(builder)?;
        if self.negate {
            Ok(format!("{expr} IS NOT NULL"))
        } else {
            Ok(format!("{expr} IS NULL"))
        }
    }
}

impl From<ExprIsNull> for Expr {
    fn from(value: ExprIsNull) -> Self {
        Self::IsNull(value)
    }
}
