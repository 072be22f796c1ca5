mod fields;
pub(crate) use fields::Fields;

mod result_iter;
pub use result_iter::ResultIter;

mod result_row;
pub use result_row::ResultRow;
