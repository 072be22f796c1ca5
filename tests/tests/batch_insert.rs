use pretty_assertions::assert_eq;
use tabula::{
    driver::{Capability, ExecResponse},
    BatchInsertQuery, Query, TableBuilder,
};
use tests::{samples::Samples, setup, setup_logged, setup_scripted, ScriptedConnection};

#[test]
fn generated_keys_are_back_filled() {
    let (mut session, log) = setup_logged();
    let Samples { cities, users } = Samples::new().unwrap();
    session.create(&[&cities.table, &users.table]).unwrap();

    let mut batch = BatchInsertQuery::new(&cities.table);
    for name in ["Munich", "Prague"] {
        batch.add_batch();
        batch.set(&cities.name, name.to_string()).unwrap();
    }

    // SQLite only reports the last rowid; the first key is derived from it
    let keys = batch.execute(&mut session).unwrap();
    assert_eq!(keys, [1, 2]);
    assert_eq!(
        log.last_sql().unwrap(),
        "INSERT INTO Cities (name) VALUES (?),(?)"
    );

    let mut prague = Query::new(&session, &cities.table, Some(cities.id.eq(2)));
    let row = prague.first(&mut session).unwrap().unwrap();
    assert_eq!(row.get(&cities.name).unwrap(), "Prague");
}

#[test]
fn no_rows_is_a_no_op() {
    let (mut session, log) = setup_logged();
    let Samples { cities, .. } = Samples::new().unwrap();

    let keys = BatchInsertQuery::new(&cities.table)
        .execute(&mut session)
        .unwrap();
    assert!(keys.is_empty());
    assert!(log.is_empty());
}

#[test]
fn explicit_keys_return_nothing() {
    let mut session = setup();
    let Samples { cities, users } = Samples::new().unwrap();
    session.create(&[&cities.table, &users.table]).unwrap();

    let mut batch = BatchInsertQuery::new(&users.table);
    batch.add_batch();
    batch.set(&users.id, "andrey".to_string()).unwrap();
    batch.set(&users.name, "Andrey".to_string()).unwrap();
    batch.add_batch();
    batch.set(&users.id, "eugene".to_string()).unwrap();
    batch.set(&users.name, "Eugene".to_string()).unwrap();
    batch.set(&users.city_id, None).unwrap();

    assert!(batch.execute(&mut session).unwrap().is_empty());

    let mut all = Query::new(&session, &users.table, Some(users.city_id.is_null()));
    assert_eq!(all.count(&mut session).unwrap(), 2);
}

#[test]
fn defaults_fill_missing_values() {
    let mut session = setup();

    let mut settings = TableBuilder::new("Settings");
    let name = settings.varchar("name", 20).primary_key().add().unwrap();
    let enabled = settings.bool("enabled").default(true).add().unwrap();
    let settings = settings.build();
    session.create(&[&settings]).unwrap();

    let mut batch = BatchInsertQuery::new(&settings);
    batch.add_batch();
    batch.set(&name, "sync".to_string()).unwrap();
    batch.add_batch();
    batch.set(&name, "backup".to_string()).unwrap();
    batch.set(&enabled, false).unwrap();
    batch.execute(&mut session).unwrap();

    let mut query = Query::new(&session, &settings, None).order_by(&name, true);
    let rows: Vec<(String, bool)> = query
        .iter(&mut session)
        .unwrap()
        .map(|row| (row.get(&name).unwrap(), row.get(&enabled).unwrap()))
        .collect();

    assert_eq!(
        rows,
        [("backup".to_string(), false), ("sync".to_string(), true)]
    );
}

#[test]
fn ignore_and_replace() {
    let (mut session, log) = setup_logged();
    let Samples { cities, users } = Samples::new().unwrap();
    session.create(&[&cities.table, &users.table]).unwrap();

    let insert = |name: &str| {
        let mut batch = BatchInsertQuery::new(&users.table);
        batch.add_batch();
        batch.set(&users.id, "andrey".to_string()).unwrap();
        batch.set(&users.name, name.to_string()).unwrap();
        batch
    };

    insert("Andrey").execute(&mut session).unwrap();

    let err = insert("Andrei").execute(&mut session).unwrap_err();
    assert!(err.is_statement_failed());
    assert!(err.is_driver());

    insert("Andrei").ignore().execute(&mut session).unwrap();
    assert_eq!(
        log.last_sql().unwrap(),
        "INSERT OR IGNORE INTO Users (id, name, city_id) VALUES (?, ?, ?)"
    );

    let mut name = Query::new(&session, &users.table, None);
    let row = name.first(&mut session).unwrap().unwrap();
    assert_eq!(row.get(&users.name).unwrap(), "Andrey");

    insert("Andrei").replace().execute(&mut session).unwrap();
    assert_eq!(
        log.last_sql().unwrap(),
        "REPLACE INTO Users (id, name, city_id) VALUES (?, ?, ?)"
    );

    let mut name = Query::new(&session, &users.table, None);
    let row = name.first(&mut session).unwrap().unwrap();
    assert_eq!(row.get(&users.name).unwrap(), "Andrei");
}

#[test]
fn key_only_table_inserts_generated_rows() {
    let (mut session, log) = setup_logged();

    let mut seq = TableBuilder::new("Seq");
    let id = seq.integer("id").auto_increment().primary_key().add().unwrap();
    let seq = seq.build();
    session.create(&[&seq]).unwrap();

    let mut batch = BatchInsertQuery::new(&seq);
    batch.add_batch();
    batch.add_batch();

    assert_eq!(batch.execute(&mut session).unwrap(), [1, 2]);
    assert_eq!(
        log.last_sql().unwrap(),
        "INSERT INTO Seq (id) VALUES (NULL),(NULL)"
    );

    let mut all = Query::new(&session, &seq, None);
    assert_eq!(all.count(&mut session).unwrap(), 2);
    assert!(all.iter(&mut session).unwrap().all(|row| row.has_value(&id)));
}

#[test]
fn key_only_table_uses_default_on_postgresql() {
    let connection = ScriptedConnection::new(&Capability::POSTGRESQL).respond_with(ExecResponse {
        count: 2,
        generated_keys: vec![5, 6],
    });
    let (mut session, log) = setup_scripted(connection);

    let mut seq = TableBuilder::new("Seq");
    seq.integer("id").auto_increment().primary_key().add().unwrap();
    let seq = seq.build();

    let mut batch = BatchInsertQuery::new(&seq);
    batch.add_batch();
    batch.add_batch();

    assert_eq!(batch.execute(&mut session).unwrap(), [5, 6]);
    assert_eq!(
        log.last_sql().unwrap(),
        "INSERT INTO Seq (id) VALUES (DEFAULT),(DEFAULT)"
    );
}

#[test]
fn mixing_explicit_and_generated_keys_fails() {
    let (mut session, mut log) = setup_logged();
    let Samples { cities, users } = Samples::new().unwrap();
    session.create(&[&cities.table, &users.table]).unwrap();
    log.clear();

    let mut batch = BatchInsertQuery::new(&cities.table);
    batch.add_batch();
    batch.set(&cities.id, 10).unwrap();
    batch.set(&cities.name, "Munich".to_string()).unwrap();
    batch.add_batch();
    batch.set(&cities.name, "Prague".to_string()).unwrap();

    let err = batch.execute(&mut session).unwrap_err();
    assert!(err.is_invalid_statement());
    assert!(err.to_string().contains("Cities.id is assigned in 1 of 2 rows"));
    assert!(log.is_empty());
}

#[test]
fn explicit_keys_in_every_row_are_bound() {
    let (mut session, log) = setup_logged();
    let Samples { cities, users } = Samples::new().unwrap();
    session.create(&[&cities.table, &users.table]).unwrap();

    let mut batch = BatchInsertQuery::new(&cities.table);
    for (id, name) in [(10, "Munich"), (20, "Prague")] {
        batch.add_batch();
        batch.set(&cities.id, id).unwrap();
        batch.set(&cities.name, name.to_string()).unwrap();
    }

    assert!(batch.execute(&mut session).unwrap().is_empty());
    assert_eq!(
        log.last_sql().unwrap(),
        "INSERT INTO Cities (id, name) VALUES (?, ?),(?, ?)"
    );
}

fn user_batch(users: &tests::samples::Users) -> BatchInsertQuery {
    let mut batch = BatchInsertQuery::new(&users.table);
    batch.add_batch();
    batch.set(&users.id, "andrey".to_string()).unwrap();
    batch.set(&users.name, "Andrey".to_string()).unwrap();
    batch
}

#[test]
fn replace_is_an_upsert_on_mysql_dialects() {
    let Samples { users, .. } = Samples::new().unwrap();

    for capability in [&Capability::MYSQL, &Capability::H2] {
        let (session, _) = setup_scripted(ScriptedConnection::new(capability));
        let (sql, params) = user_batch(&users).replace().to_sql(&session).unwrap();

        assert_eq!(
            sql,
            "INSERT INTO Users (id, name, city_id) VALUES (?, ?, ?) \
             ON DUPLICATE KEY UPDATE id = VALUES(id), name = VALUES(name), city_id = VALUES(city_id)"
        );
        assert_eq!(params.len(), 3);
    }
}

#[test]
fn ignore_on_mysql() {
    let Samples { users, .. } = Samples::new().unwrap();
    let (session, _) = setup_scripted(ScriptedConnection::new(&Capability::MYSQL));

    let (sql, _) = user_batch(&users).ignore().to_sql(&session).unwrap();
    assert_eq!(sql, "INSERT IGNORE INTO Users (id, name, city_id) VALUES (?, ?, ?)");
}

#[test]
fn replace_without_vendor_support_fails() {
    let Samples { users, .. } = Samples::new().unwrap();
    let (mut session, log) = setup_scripted(ScriptedConnection::new(&Capability::POSTGRESQL));

    let err = user_batch(&users).replace().execute(&mut session).unwrap_err();
    assert!(err.is_invalid_statement());
    assert!(err.to_string().contains("does not support replace"));
    assert!(log.is_empty());
}

fn city_batch(cities: &tests::samples::Cities) -> BatchInsertQuery {
    let mut batch = BatchInsertQuery::new(&cities.table);
    for name in ["Munich", "Prague"] {
        batch.add_batch();
        batch.set(&cities.name, name.to_string()).unwrap();
    }
    batch
}

#[test]
fn every_key_is_reported_on_mysql() {
    let Samples { cities, .. } = Samples::new().unwrap();
    let connection = ScriptedConnection::new(&Capability::MYSQL).respond_with(ExecResponse {
        count: 2,
        generated_keys: vec![7, 8],
    });
    let (mut session, _) = setup_scripted(connection);

    assert_eq!(city_batch(&cities).execute(&mut session).unwrap(), [7, 8]);
}

#[test]
fn generated_key_count_mismatch_fails() {
    let Samples { cities, .. } = Samples::new().unwrap();

    // A driver that reports every key must not be back-filled
    let connection = ScriptedConnection::new(&Capability::MYSQL).respond_with(ExecResponse {
        count: 2,
        generated_keys: vec![8],
    });
    let (mut session, _) = setup_scripted(connection);
    let err = city_batch(&cities).execute(&mut session).unwrap_err();
    assert!(err.is_invalid_record_count());
    assert!(err.to_string().contains("1 generated keys for 2 inserted rows"));

    let connection = ScriptedConnection::new(&Capability::SQLITE).respond_with(ExecResponse {
        count: 2,
        generated_keys: vec![],
    });
    let (mut session, _) = setup_scripted(connection);
    let err = city_batch(&cities).execute(&mut session).unwrap_err();
    assert!(err.is_invalid_record_count());
}

#[test]
fn affected_row_mismatch_fails() {
    let Samples { cities, .. } = Samples::new().unwrap();
    let connection = ScriptedConnection::new(&Capability::SQLITE).respond_with(ExecResponse {
        count: 1,
        generated_keys: vec![1],
    });
    let (mut session, _) = setup_scripted(connection);

    let err = city_batch(&cities).execute(&mut session).unwrap_err();
    assert!(err.is_invalid_record_count());
    assert!(err.to_string().contains("inserted 1 rows into Cities but expected 2"));
}
