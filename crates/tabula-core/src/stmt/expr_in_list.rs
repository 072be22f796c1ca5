use super::{Expr, QueryBuilder, Value};
use crate::Result;

/// `expr IN (v1, v2, ...)`. The list values are bound to the column type of
/// `expr`.
#[derive(Debug, Clone)]
pub struct ExprInList {
    pub expr: Box<Expr>,
    pub list: Vec<Value>,
}

impl Expr {
    pub fn in_list(expr: impl Into<Expr>, list: impl IntoIterator<Item = Value>) -> Expr {
        ExprInList {
            expr: Box::new(expr.into()),
            list: list.into_iter().collect(),
        }
        .into()
    }
}

impl ExprInList {
    pub(super) fn to_sql(&self, builder: &mut QueryBuilder) -> Result<String> {
        // An empty IN list is a syntax error in most dialects
        if self.list.is_empty() {
            return Ok("FALSE".to_string());
        }

        let ty = self.expr.column_type();
        let expr = self.expr.to_sql(builder)?;

        let mut items = Vec::with_capacity(self.list.len());
        for value in &self.list {
            items.push(builder.register_argument(value.clone(), &ty)?);
        }

        Ok(format!("{expr} IN ({})", items.join(", ")))
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Self::InList(value)
    }
}
