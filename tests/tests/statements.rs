use pretty_assertions::assert_eq;
use tabula::{
    schema::{ColumnType, Type},
    Delete, Expr, Insert, Query, TableBuilder, Update,
};
use tests::{samples::Samples, setup, setup_logged};

#[test]
fn insert_returns_the_written_row() {
    let (mut session, log) = setup_logged();
    let Samples { cities, users } = Samples::new().unwrap();
    session.create(&[&cities.table, &users.table]).unwrap();

    let munich = Insert::new(&cities.table)
        .set(&cities.name, "Munich")
        .unwrap()
        .execute(&mut session)
        .unwrap();

    assert_eq!(log.last_sql().unwrap(), "INSERT INTO Cities (name) VALUES (?)");
    assert_eq!(munich.get(&cities.id).unwrap(), 1);
    assert_eq!(munich.get(&cities.name).unwrap(), "Munich");
    assert_eq!(munich.to_string(), "Cities.id=1, Cities.name=Munich");

    let user = Insert::new(&users.table)
        .set(&users.id, "sergey")
        .unwrap()
        .set(&users.name, "Sergey")
        .unwrap()
        .set(&users.city_id, munich.get(&cities.id).unwrap())
        .unwrap()
        .execute(&mut session)
        .unwrap();

    assert_eq!(user.get(&users.city_id).unwrap(), Some(1));
}

#[test]
fn insert_assigning_a_column_twice_fails() {
    let Samples { cities, .. } = Samples::new().unwrap();

    let err = Insert::new(&cities.table)
        .set(&cities.name, "Munich")
        .unwrap()
        .set(&cities.name, "Prague")
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid statement: Cities.name is already initialized"
    );
}

#[test]
fn insert_default_values() {
    let (mut session, log) = setup_logged();

    let mut events = TableBuilder::new("Events");
    let id = events.integer("id").auto_increment().primary_key().add().unwrap();
    let events = events.build();
    session.create(&[&events]).unwrap();

    let row = Insert::new(&events).execute(&mut session).unwrap();
    assert_eq!(log.last_sql().unwrap(), "INSERT INTO Events DEFAULT VALUES");
    assert_eq!(row.get(&id).unwrap(), 1);
}

#[test]
fn insert_row_carries_generated_key_but_not_computed_values() {
    let (mut session, log) = setup_logged();

    let mut counters = TableBuilder::new("Counters");
    let id = counters.integer("id").auto_increment().primary_key().add().unwrap();
    let total = counters.integer("total").add().unwrap();
    let counters = counters.build();
    session.create(&[&counters]).unwrap();

    let sum = Expr::value(ColumnType::new(Type::Integer), 2i32) + 3i32;
    let row = Insert::new(&counters)
        .set(&total, sum)
        .unwrap()
        .execute(&mut session)
        .unwrap();

    assert_eq!(
        log.last_sql().unwrap(),
        "INSERT INTO Counters (total) VALUES ((? + ?))"
    );
    assert_eq!(row.get(&id).unwrap(), 1);
    assert!(row.contains(&total));
    assert!(!row.has_value(&total));

    let mut stored = Query::new(&session, &counters, Some(id.eq(1)));
    let stored = stored.first(&mut session).unwrap().unwrap();
    assert_eq!(stored.get(&total).unwrap(), 5);
}

#[test]
fn update_and_delete_report_affected_rows() {
    let mut session = setup();
    let samples = Samples::new().unwrap();
    samples.create(&mut session).unwrap();
    samples.populate(&mut session).unwrap();

    let Samples { users, .. } = &samples;

    let updated = Update::new(&users.table)
        .filter(users.city_id.is_null())
        .set(&users.city_id, Some(3))
        .unwrap()
        .execute(&mut session)
        .unwrap();
    assert_eq!(updated, 3);

    let mut prague = Query::new(&session, &users.table, Some(users.city_id.eq(3)));
    assert_eq!(prague.count(&mut session).unwrap(), 3);

    let renamed = Update::new(&users.table)
        .filter(users.id.eq("alex"))
        .set(&users.name, "Alexey")
        .unwrap()
        .execute(&mut session)
        .unwrap();
    assert_eq!(renamed, 1);

    let deleted = Delete::new(&users.table)
        .filter(users.name.not_like("A%"))
        .execute(&mut session)
        .unwrap();
    assert_eq!(deleted, 3);

    assert_eq!(Delete::new(&users.table).execute(&mut session).unwrap(), 2);
}

#[test]
fn update_renders_arithmetic() {
    let session = setup();

    let mut counters = TableBuilder::new("Counters");
    let name = counters.varchar("name", 20).primary_key().add().unwrap();
    let hits = counters.long("hits").add().unwrap();
    let counters = counters.build();

    let update = Update::new(&counters)
        .filter(name.eq("home"))
        .set(&hits, hits.expr() + 1)
        .unwrap();

    assert_eq!(
        update.to_sql(&mut session.literal_builder()).unwrap(),
        "UPDATE Counters SET hits = (Counters.hits + 1) WHERE Counters.name = 'home'"
    );
}

#[test]
fn update_without_assignments_fails() {
    let session = setup();
    let Samples { cities, .. } = Samples::new().unwrap();

    let err = Update::new(&cities.table)
        .to_sql(&mut session.query_builder())
        .unwrap_err();
    assert!(err.is_invalid_statement());
}
