mod exec_log;
pub use exec_log::ExecLog;

mod logging_connection;
pub use logging_connection::{LoggingConnection, Statement};

pub mod samples;

pub use scripted_connection::ScriptedConnection;

use tabula::Session;

/// Installs a test subscriber once. `RUST_LOG=tabula=debug` shows every
/// executed statement.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A session on a fresh in-memory SQLite database.
pub fn setup() -> Session {
    init_tracing();
    Session::builder()
        .connect("sqlite::memory:")
        .expect("failed to open in-memory database")
}

/// Like [`setup`], with every statement recorded in the returned log.
pub fn setup_logged() -> (Session, ExecLog) {
    init_tracing();

    let connection = tabula_driver_sqlite::Connection::in_memory()
        .expect("failed to open in-memory database");
    let logging = LoggingConnection::new(Box::new(connection));
    let log = ExecLog::new(logging.log_handle());

    (Session::builder().build(logging), log)
}

/// A session on a [`ScriptedConnection`], with its statement log.
pub fn setup_scripted(connection: ScriptedConnection) -> (Session, ExecLog) {
    init_tracing();

    let log = ExecLog::new(connection.log_handle());
    (Session::builder().build(connection), log)
}
