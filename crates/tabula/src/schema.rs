mod column;
pub use column::Column;

mod column_set;
pub use column_set::{ColumnSet, FieldSet};

mod join;
pub use join::{Join, JoinPart, JoinType};

mod table_builder;
pub use table_builder::{ColumnBuilder, TableBuilder};

pub use tabula_core::schema::{ColumnDef, ColumnType, Index, ReferenceOption, Table, Type};
