use super::{
    Aggregate, BinaryOp, ExprAnd, ExprBinaryOp, ExprFunc, ExprInList, ExprIsNull, ExprNot, ExprOr,
    QueryBuilder, TypedValue, Value,
};
use crate::{
    driver::Vendor,
    schema::{ColumnDef, ColumnType, Type},
    Result,
};
use chrono::FixedOffset;
use std::sync::Arc;

/// An untyped SQL expression.
///
/// Every node renders itself through a [`QueryBuilder`], which decides
/// whether literal values are inlined or bound as positional parameters.
#[derive(Debug, Clone)]
pub enum Expr {
    /// AND a set of predicates
    And(ExprAnd),

    /// Binary comparison or arithmetic
    BinaryOp(ExprBinaryOp),

    /// A table column, rendered as its qualified identifier
    Column(Arc<ColumnDef>),

    /// An aggregate function call
    Func(ExprFunc),

    /// `expr IN (...)`
    InList(ExprInList),

    /// `expr IS [NOT] NULL`
    IsNull(ExprIsNull),

    /// Negates a predicate
    Not(ExprNot),

    /// OR a set of predicates
    Or(ExprOr),

    /// A literal bound to a column type
    Value(TypedValue),
}

impl Expr {
    pub fn column(column: &Arc<ColumnDef>) -> Expr {
        Expr::Column(column.clone())
    }

    pub fn value(ty: ColumnType, value: impl Into<Value>) -> Expr {
        Expr::Value(TypedValue::new(ty, value))
    }

    pub fn count(arg: impl Into<Expr>) -> Expr {
        Expr::aggregate(Aggregate::Count, arg)
    }

    pub fn count_distinct(arg: impl Into<Expr>) -> Expr {
        Expr::aggregate(Aggregate::CountDistinct, arg)
    }

    pub fn sum(arg: impl Into<Expr>) -> Expr {
        Expr::aggregate(Aggregate::Sum, arg)
    }

    pub fn min(arg: impl Into<Expr>) -> Expr {
        Expr::aggregate(Aggregate::Min, arg)
    }

    pub fn max(arg: impl Into<Expr>) -> Expr {
        Expr::aggregate(Aggregate::Max, arg)
    }

    pub fn avg(arg: impl Into<Expr>) -> Expr {
        Expr::aggregate(Aggregate::Avg, arg)
    }

    pub fn add(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Add, rhs)
    }

    pub fn sub(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Sub, rhs)
    }

    pub fn mul(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Mul, rhs)
    }

    pub fn div(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Div, rhs)
    }

    pub fn is_or(&self) -> bool {
        matches!(self, Expr::Or(_))
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Expr::Column(_))
    }

    pub fn as_column(&self) -> Option<&Arc<ColumnDef>> {
        match self {
            Expr::Column(column) => Some(column),
            _ => None,
        }
    }

    /// Returns `true` for a literal NULL.
    pub fn is_null_value(&self) -> bool {
        matches!(self, Expr::Value(TypedValue { value: Value::Null, .. }))
    }

    /// The column type the expression evaluates to. Used to decode result
    /// values and to bind literals compared against this expression.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Expr::Column(column) => column.column_type.clone(),
            Expr::Value(value) => value.ty.clone(),
            Expr::Func(func) => func.column_type(),
            Expr::BinaryOp(binary_op) if binary_op.op.is_arithmetic() => {
                let mut ty = binary_op.lhs.column_type();
                ty.auto_increment = false;
                ty
            }
            _ => ColumnType::new(Type::Boolean),
        }
    }

    /// Renders the expression, registering literal arguments with `builder`.
    pub fn to_sql(&self, builder: &mut QueryBuilder) -> Result<String> {
        match self {
            Expr::And(expr) => expr.to_sql(builder),
            Expr::BinaryOp(expr) => expr.to_sql(builder),
            Expr::Column(column) => Ok(builder.full_identity(column)),
            Expr::Func(expr) => expr.to_sql(builder),
            Expr::InList(expr) => expr.to_sql(builder),
            Expr::IsNull(expr) => expr.to_sql(builder),
            Expr::Not(expr) => expr.to_sql(builder),
            Expr::Or(expr) => expr.to_sql(builder),
            Expr::Value(TypedValue { ty, value }) => builder.register_argument(value.clone(), ty),
        }
    }

    /// Renders the expression with every literal inlined.
    ///
    /// Two expressions denote the same term iff this text is equal; result
    /// rows and projections are keyed on it.
    pub fn literal_sql(&self, vendor: Vendor, time_zone: FixedOffset) -> Result<String> {
        self.to_sql(&mut QueryBuilder::literal(vendor, time_zone))
    }
}

impl From<&Arc<ColumnDef>> for Expr {
    fn from(value: &Arc<ColumnDef>) -> Self {
        Expr::Column(value.clone())
    }
}

impl From<TypedValue> for Expr {
    fn from(value: TypedValue) -> Self {
        Expr::Value(value)
    }
}
