mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_func;
pub use expr_func::{Aggregate, ExprFunc};

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod id;
pub use id::Id;

mod op_binary;
pub use op_binary::BinaryOp;

mod query_builder;
pub use query_builder::QueryBuilder;

mod typed_value;
pub use typed_value::TypedValue;

mod value;
pub use value::Value;

mod value_enum;
pub use value_enum::ValueEnum;
