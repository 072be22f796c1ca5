mod capability;
pub use capability::Capability;

mod response;
pub use response::{ExecResponse, Rows};

mod vendor;
pub use vendor::Vendor;

use crate::stmt::Value;
use std::fmt::Debug;

/// A synchronous connection to a relational database.
///
/// Parameters and returned values are driver-native [`Value`]s; conversion
/// from logical values happens in [`ColumnType`](crate::schema::ColumnType).
pub trait Connection: Debug + Send + 'static {
    /// Describes the connected vendor and what it supports.
    fn capability(&self) -> &'static Capability;

    /// Runs a query and materializes the rows it returns.
    fn query(&mut self, sql: &str, params: &[Value]) -> crate::Result<Rows>;

    /// Runs a statement that returns no rows.
    ///
    /// When `auto_increment` names columns, the keys generated for them are
    /// returned in insertion order.
    fn execute(
        &mut self,
        sql: &str,
        params: &[Value],
        auto_increment: &[&str],
    ) -> crate::Result<ExecResponse>;

    /// Runs several queries in one round trip and returns their rows in
    /// submission order.
    ///
    /// Drivers without multi-statement support run them one at a time.
    fn query_batch(&mut self, statements: &[(String, Vec<Value>)]) -> crate::Result<Vec<Rows>> {
        statements
            .iter()
            .map(|(sql, params)| self.query(sql, params))
            .collect()
    }

    /// Runs a schema statement.
    fn execute_ddl(&mut self, sql: &str) -> crate::Result<()>;
}
