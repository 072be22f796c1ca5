use crate::Result;

use tabula_core::{Connection, Error};
use url::Url;

/// Opens a connection for `url`, dispatching on its scheme.
///
/// `sqlite::memory:` and `sqlite:/path/to/file` are recognized when the
/// `sqlite` feature is enabled.
pub fn connect(url: &str) -> Result<Box<dyn Connection>> {
    let parsed = Url::parse(url).map_err(|err| {
        Error::invalid_connection_url(format!("{err}; url={url}"))
    })?;

    match parsed.scheme() {
        "sqlite" => connect_sqlite(&parsed),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &Url) -> Result<Box<dyn Connection>> {
    Ok(Box::new(tabula_driver_sqlite::Connection::connect(url.as_str())?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::invalid_connection_url(format!(
        "`sqlite` feature not enabled; url={url}"
    )))
}
