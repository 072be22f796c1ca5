pub mod cache;
pub use cache::{EntityCache, NoCache};

pub mod cursor;
pub use cursor::{ResultIter, ResultRow};

mod lookup_table;
pub use lookup_table::LookupTable;

pub mod schema;
pub use schema::{Column, ColumnSet, FieldSet, Join, JoinType, TableBuilder};

pub mod session;
pub use session::Session;

pub mod stmt;
pub use stmt::{
    batch_select, BatchInsertQuery, DbEnum, Delete, Expr, Field, Insert, IntoExpr, Primitive,
    Projection, Query, Update,
};

pub use tabula_core::{bail, driver, err, Error, Result};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        stmt::{enum_value, load_enum, DbEnum, Primitive},
        Result,
    };
    pub use tabula_core::stmt::Value;
}
