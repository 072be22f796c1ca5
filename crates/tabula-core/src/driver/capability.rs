use super::Vendor;

#[derive(Debug)]
pub struct Capability {
    pub vendor: Vendor,

    /// The vendor whose dialect this database accepts. H2 in MySQL mode,
    /// for instance, is compatible with MySQL.
    pub compatible_with: Vendor,

    /// Supports row-level locking with `SELECT ... FOR UPDATE`.
    pub select_for_update: bool,

    /// Supports `REPLACE INTO`.
    pub replace: bool,

    /// A multi-row insert reports every generated key. When false only the
    /// last key is returned.
    pub all_generated_keys: bool,

    /// Several `;`-separated queries can be sent in one round trip.
    pub multi_statement: bool,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        vendor: Vendor::Sqlite,
        compatible_with: Vendor::Sqlite,
        select_for_update: false,
        replace: true,
        all_generated_keys: false,
        multi_statement: false,
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        vendor: Vendor::Mysql,
        compatible_with: Vendor::Mysql,
        select_for_update: true,
        replace: true,
        all_generated_keys: true,
        multi_statement: true,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        vendor: Vendor::Postgresql,
        compatible_with: Vendor::Postgresql,
        select_for_update: true,
        replace: false,
        all_generated_keys: true,
        multi_statement: false,
    };

    /// H2 running in MySQL compatibility mode
    pub const H2: Self = Self {
        vendor: Vendor::H2,
        compatible_with: Vendor::Mysql,
        select_for_update: true,
        replace: false,
        all_generated_keys: false,
        multi_statement: false,
    };
}
