use super::{Expr, QueryBuilder};
use crate::Result;

#[derive(Debug, Clone)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// Disjunction of two predicates. Nested disjunctions are flattened.
    pub fn or(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        let mut operands = vec![];

        for expr in [lhs.into(), rhs.into()] {
            match expr {
                Expr::Or(or) => operands.extend(or.operands),
                expr => operands.push(expr),
            }
        }

        ExprOr { operands }.into()
    }
}

impl ExprOr {
    pub(super) fn to_sql(&self, builder: &mut QueryBuilder) -> Result<String> {
        let parts = self
            .operands
            .iter()
            .map(|operand| operand.to_sql(builder))
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join(" OR "))
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Self::Or(value)
    }
}
