use super::{Expr, QueryBuilder};
use crate::{
    schema::{ColumnType, Type},
    Result,
};

/// A function call expression.
///
/// ```text
/// COUNT(Users.id)
/// COUNT(DISTINCT Users.city_id)
/// MAX(Cities.id)
/// ```
#[derive(Debug, Clone)]
pub struct ExprFunc {
    pub aggregate: Aggregate,
    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Count,
    CountDistinct,
    Sum,
    Min,
    Max,
    Avg,
}

impl Expr {
    pub fn aggregate(aggregate: Aggregate, arg: impl Into<Expr>) -> Expr {
        ExprFunc {
            aggregate,
            arg: Box::new(arg.into()),
        }
        .into()
    }
}

impl ExprFunc {
    /// Counting always yields a non-null long. The other aggregates yield
    /// NULL over an empty group, so their type is the nullable argument type.
    pub fn column_type(&self) -> ColumnType {
        match self.aggregate {
            Aggregate::Count | Aggregate::CountDistinct => ColumnType::new(Type::Long),
            Aggregate::Avg => ColumnType::new(Type::Decimal {
                scale: 38,
                precision: 20,
            })
            .nullable(),
            Aggregate::Sum | Aggregate::Min | Aggregate::Max => {
                let mut ty = self.arg.column_type().nullable();
                ty.auto_increment = false;
                ty
            }
        }
    }

    pub(super) fn to_sql(&self, builder: &mut QueryBuilder) -> Result<String> {
        let arg = self.arg.to_sql(builder)?;

        Ok(match self.aggregate {
            Aggregate::Count => format!("COUNT({arg})"),
            Aggregate::CountDistinct => format!("COUNT(DISTINCT {arg})"),
            Aggregate::Sum => format!("SUM({arg})"),
            Aggregate::Min => format!("MIN({arg})"),
            Aggregate::Max => format!("MAX({arg})"),
            Aggregate::Avg => format!("AVG({arg})"),
        })
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
