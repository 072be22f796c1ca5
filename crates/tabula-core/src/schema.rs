mod column;
pub use column::{ColumnDef, ColumnRef};

mod column_type;
pub use column_type::{ColumnType, Type};

mod index;
pub use index::Index;

mod reference_option;
pub use reference_option::ReferenceOption;

mod table;
pub use table::Table;
