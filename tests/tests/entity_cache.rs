use pretty_assertions::assert_eq;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use tabula::{Delete, EntityCache, Query, Result, Session};
use tabula_core::{stmt::Value, Connection};
use tests::{samples::Samples, ExecLog, LoggingConnection};

/// Buffers city inserts until the `Cities` table is read.
#[derive(Debug, Default, Clone)]
struct PendingCities {
    pending: Arc<Mutex<Vec<String>>>,
    referrer_clears: Arc<AtomicUsize>,
}

impl EntityCache for PendingCities {
    fn flush(&mut self, connection: &mut dyn Connection, tables: &[Arc<str>]) -> Result<()> {
        if tables.iter().any(|table| &**table == "Cities") {
            self.flush_all(connection)?;
        }
        Ok(())
    }

    fn flush_all(&mut self, connection: &mut dyn Connection) -> Result<()> {
        let pending = std::mem::take(&mut *self.pending.lock().unwrap());
        for name in pending {
            connection.execute("INSERT INTO Cities (name) VALUES (?)", &[Value::from(name)], &[])?;
        }
        Ok(())
    }

    fn clear_referrers_cache(&mut self) {
        self.referrer_clears.fetch_add(1, Ordering::SeqCst);
    }
}

fn setup(cache: &PendingCities) -> (Session, ExecLog, Samples) {
    tests::init_tracing();

    let connection = tabula_driver_sqlite::Connection::in_memory().unwrap();
    let logging = LoggingConnection::new(Box::new(connection));
    let log = ExecLog::new(logging.log_handle());
    let mut session = Session::builder()
        .entity_cache(cache.clone())
        .build(logging);

    let samples = Samples::new().unwrap();
    samples.create(&mut session).unwrap();
    (session, log, samples)
}

#[test]
fn reads_flush_the_tables_they_touch() {
    let cache = PendingCities::default();
    let (mut session, mut log, samples) = setup(&cache);
    let Samples { cities, users } = &samples;

    cache.pending.lock().unwrap().push("Munich".to_string());
    log.clear();

    let mut query = Query::new(&session, &users.table, None);
    assert_eq!(query.count(&mut session).unwrap(), 0);
    assert_eq!(log.sql(), ["SELECT COUNT(*) FROM Users"]);

    log.clear();
    let mut query = Query::new(&session, &cities.table, None);
    assert_eq!(query.count(&mut session).unwrap(), 1);
    assert_eq!(
        log.sql(),
        [
            "INSERT INTO Cities (name) VALUES (?)",
            "SELECT COUNT(*) FROM Cities",
        ]
    );
}

#[test]
fn writes_flush_everything_and_clear_referrers() {
    let cache = PendingCities::default();
    let (mut session, mut log, samples) = setup(&cache);

    cache.pending.lock().unwrap().push("Prague".to_string());
    log.clear();

    Delete::new(&samples.users.table)
        .filter(samples.users.name.eq("nobody"))
        .execute(&mut session)
        .unwrap();

    assert_eq!(
        log.sql(),
        [
            "INSERT INTO Cities (name) VALUES (?)",
            "DELETE FROM Users WHERE Users.name = ?",
        ]
    );
    assert_eq!(cache.referrer_clears.load(Ordering::SeqCst), 1);
}
