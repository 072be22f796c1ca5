use pretty_assertions::assert_eq;
use tabula::{ColumnSet, Query, Session};
use tabula_core::stmt::Value;
use tests::{samples::Samples, setup};

fn render(session: &Session, query: &Query) -> String {
    query.to_sql(&mut session.literal_builder(), false).unwrap()
}

#[test]
fn select_all_columns() {
    let session = setup();
    let Samples { cities, .. } = Samples::new().unwrap();

    let query = Query::new(&session, &cities.table, Some(cities.name.eq("Munich")));
    assert_eq!(
        render(&session, &query),
        "SELECT Cities.id, Cities.name FROM Cities WHERE Cities.name = 'Munich'"
    );
}

#[test]
fn duplicate_fields_are_rendered_once() {
    let session = setup();
    let Samples { cities, .. } = Samples::new().unwrap();

    let query = ColumnSet::from(&cities.table)
        .slice(&[&cities.name, &cities.id, &cities.name])
        .select_all(&session);

    assert_eq!(render(&session, &query), "SELECT Cities.name, Cities.id FROM Cities");
}

#[test]
fn equal_expressions_are_rendered_once() {
    let session = setup();
    let Samples { users, .. } = Samples::new().unwrap();

    let query = ColumnSet::from(&users.table)
        .slice(&[&users.id.count(), &users.name, &users.id.count()])
        .select_all(&session);

    assert_eq!(
        render(&session, &query),
        "SELECT COUNT(Users.id), Users.name FROM Users"
    );
}

#[test]
fn having_twice_fails() {
    let session = setup();
    let Samples { users, .. } = Samples::new().unwrap();

    let query = ColumnSet::from(&users.table)
        .slice(&[&users.city_id, &users.id.count()])
        .select_all(&session)
        .group_by(&users.city_id)
        .having(users.id.count().gt(1))
        .unwrap();

    assert_eq!(
        render(&session, &query),
        "SELECT Users.city_id, COUNT(Users.id) FROM Users \
         GROUP BY Users.city_id HAVING COUNT(Users.id) > 1"
    );

    let err = query.having(users.id.count().gt(5)).unwrap_err();
    assert!(err.is_invalid_statement());

    let message = err.to_string();
    assert!(message.contains("Old value = 'COUNT(Users.id) > 1'"), "{message}");
    assert!(message.contains("new value = 'COUNT(Users.id) > 5'"), "{message}");
}

#[test]
fn order_limit_offset() {
    let session = setup();
    let Samples { users, .. } = Samples::new().unwrap();

    let query = Query::new(&session, &users.table, Some(users.name.like("A%")))
        .order_by(&users.name, true)
        .order_by(&users.id, false)
        .limit(2)
        .offset(1);

    assert_eq!(
        render(&session, &query),
        "SELECT Users.id, Users.name, Users.city_id FROM Users \
         WHERE Users.name LIKE 'A%' \
         ORDER BY Users.name ASC, Users.id DESC LIMIT 2 OFFSET 1"
    );
}

#[test]
fn offset_requires_limit() {
    let session = setup();
    let Samples { cities, .. } = Samples::new().unwrap();

    let query = Query::new(&session, &cities.table, None).offset(10);
    assert_eq!(render(&session, &query), "SELECT Cities.id, Cities.name FROM Cities");
}

#[test]
fn count_ignores_grouping_and_paging() {
    let session = setup();
    let Samples { users, .. } = Samples::new().unwrap();

    let query = Query::new(&session, &users.table, Some(users.city_id.is_not_null()))
        .order_by(&users.name, true)
        .limit(3);

    let sql = query.to_sql(&mut session.literal_builder(), true).unwrap();
    assert_eq!(
        sql,
        "SELECT COUNT(*) FROM Users WHERE Users.city_id IS NOT NULL"
    );
}

#[test]
fn for_update() {
    let session = Session::builder()
        .selects_for_update(true)
        .connect("sqlite::memory:")
        .unwrap();
    let Samples { cities, .. } = Samples::new().unwrap();

    // SQLite cannot lock rows, so the session default does not apply
    let query = Query::new(&session, &cities.table, None);
    assert_eq!(render(&session, &query), "SELECT Cities.id, Cities.name FROM Cities");

    let query = Query::new(&session, &cities.table, None).limit(1).for_update();
    assert_eq!(
        render(&session, &query),
        "SELECT Cities.id, Cities.name FROM Cities LIMIT 1 FOR UPDATE"
    );
}

#[test]
fn prepared_arguments() {
    let session = setup();
    let Samples { users, .. } = Samples::new().unwrap();

    let query = Query::new(
        &session,
        &users.table,
        Some(
            users
                .name
                .eq("O'Brien")
                .or(users.city_id.in_list([Some(1), Some(2)])),
        ),
    );

    let mut builder = session.query_builder();
    let sql = query.to_sql(&mut builder, false).unwrap();

    assert_eq!(
        sql,
        "SELECT Users.id, Users.name, Users.city_id FROM Users \
         WHERE Users.name = ? OR Users.city_id IN (?, ?)"
    );
    assert_eq!(
        builder.params().unwrap(),
        [Value::from("O'Brien"), Value::I32(1), Value::I32(2)]
    );

    assert_eq!(
        render(&session, &query),
        "SELECT Users.id, Users.name, Users.city_id FROM Users \
         WHERE Users.name = 'O''Brien' OR Users.city_id IN (1, 2)"
    );
}

#[test]
fn is_empty_restores_limit_on_failure() {
    let mut session = setup();
    let Samples { cities, .. } = Samples::new().unwrap();

    // The table was never created
    let mut query = Query::new(&session, &cities.table, None).limit(5);
    let err = query.is_empty(&mut session).unwrap_err();

    assert!(err.is_statement_failed());
    assert_eq!(
        err.sql(),
        Some("SELECT Cities.id, Cities.name FROM Cities LIMIT 1")
    );
    assert_eq!(
        render(&session, &query),
        "SELECT Cities.id, Cities.name FROM Cities LIMIT 5"
    );
}

#[test]
fn is_empty_is_memoized() {
    let mut session = setup();
    let samples = Samples::new().unwrap();
    samples.create(&mut session).unwrap();

    let mut query = Query::new(&session, &samples.cities.table, None);
    assert!(query.is_empty(&mut session).unwrap());

    samples.populate(&mut session).unwrap();
    assert!(query.is_empty(&mut session).unwrap());

    let mut query = Query::new(&session, &samples.cities.table, None);
    assert!(!query.is_empty(&mut session).unwrap());
}
