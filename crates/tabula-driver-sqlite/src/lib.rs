mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use std::path::Path;
use tabula_core::{
    driver::{Capability, ExecResponse, Rows},
    stmt, Error, Result,
};
use url::Url;

/// A connection to a SQLite database.
#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    /// Opens the database named by a `sqlite:` URL. `sqlite::memory:` opens
    /// a private in-memory database; any other path opens a file.
    pub fn connect(url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url}"))
        })?;

        if parsed.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url}"
            )));
        }

        if parsed.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(parsed.path())
        }
    }

    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self { connection })
    }
}

impl tabula_core::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    fn query(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Rows> {
        let mut stmt = self.connection.prepare_cached(sql).map_err(Error::driver)?;
        let width = stmt.column_count();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter().map(Value::from)))
            .map_err(Error::driver)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut items = Vec::with_capacity(width);

            for index in 0..width {
                let value = row.get_ref(index).map_err(Error::driver)?;
                items.push(Value::from_sql(value).into_inner());
            }

            ret.push(items);
        }

        Ok(Rows::new(ret))
    }

    fn execute(
        &mut self,
        sql: &str,
        params: &[stmt::Value],
        auto_increment: &[&str],
    ) -> Result<ExecResponse> {
        let mut stmt = self.connection.prepare_cached(sql).map_err(Error::driver)?;

        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter().map(Value::from)))
            .map_err(Error::driver)?;

        let mut response = ExecResponse::count(u64::try_from(count)?);

        // SQLite only reports the last rowid of a multi-row insert
        if !auto_increment.is_empty() && count > 0 {
            response.generated_keys.push(self.connection.last_insert_rowid());
        }

        Ok(response)
    }

    fn execute_ddl(&mut self, sql: &str) -> Result<()> {
        self.connection.execute_batch(sql).map_err(Error::driver)
    }
}
