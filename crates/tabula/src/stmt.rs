mod batch_insert;
pub use batch_insert::BatchInsertQuery;

mod batch_select;
pub use batch_select::batch_select;

mod db_enum;
pub use db_enum::{enum_value, load_enum, DbEnum};

mod delete;
pub use delete::Delete;

mod expr;
pub use expr::Expr;

mod insert;
pub use insert::Insert;

mod into_expr;
pub use into_expr::{Field, IntoExpr, Projection};

mod primitive;
pub use primitive::Primitive;

mod primitive_chrono;

mod query;
pub use query::Query;

mod update;
pub use update::Update;
