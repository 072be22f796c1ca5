use super::{Expr, QueryBuilder};
use crate::Result;

#[derive(Debug, Clone)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// Conjunction of two predicates. Nested conjunctions are flattened.
    pub fn and(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        let mut operands = vec![];

        for expr in [lhs.into(), rhs.into()] {
            match expr {
                Expr::And(and) => operands.extend(and.operands),
                expr => operands.push(expr),
            }
        }

        ExprAnd { operands }.into()
    }
}

impl ExprAnd {
    pub(super) fn to_sql(&self, builder: &mut QueryBuilder) -> Result<String> {
        let mut parts = Vec::with_capacity(self.operands.len());
        for operand in &self.operands {
            let sql = operand.to_sql(builder)?;
            if operand.is_or() {
                parts.push(format!("({sql})"));
            } else {
                parts.push(sql);
            }
        }
        Ok(parts.join(" AND "))
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
