use pretty_assertions::assert_eq;
use tabula::{ColumnSet, Join, Query};
use tests::{samples::Samples, setup};

fn populated() -> (tabula::Session, Samples) {
    let mut session = setup();
    let samples = Samples::new().unwrap();
    samples.create(&mut session).unwrap();
    samples.populate(&mut session).unwrap();
    (session, samples)
}

#[test]
fn fields_outside_the_projection() {
    let (mut session, samples) = populated();
    let Samples { users, .. } = &samples;

    let mut query = ColumnSet::from(&users.table)
        .slice(&[&users.id])
        .select(&session, users.id.eq("andrey"));
    let row = query.first(&mut session).unwrap().unwrap();

    assert!(row.contains(&users.id));
    assert!(!row.contains(&users.name));
    assert_eq!(row.try_get(&users.name).unwrap(), None);

    let err = row.get(&users.name).unwrap_err();
    assert!(err.is_invalid_statement());
    assert_eq!(
        err.to_string(),
        "invalid statement: Users.name is not in record set"
    );
}

#[test]
fn nulls_on_the_outer_side_of_a_join() {
    let (mut session, samples) = populated();
    let Samples { cities, users } = &samples;

    let mut query = Join::new(&users.table)
        .left_join(&cities.table)
        .unwrap()
        .select(&session, users.id.eq("eugene"));
    let row = query.first(&mut session).unwrap().unwrap();

    assert!(row.contains(&cities.name));
    assert!(!row.has_value(&cities.name));
    assert_eq!(row.try_get(&cities.name).unwrap(), None);
    assert!(row.get(&cities.name).unwrap_err().is_type_conversion());
    assert_eq!(row.get(&users.city_id).unwrap(), None);
}

#[test]
fn set_overwrites_a_value() {
    let (mut session, samples) = populated();
    let Samples { cities, .. } = &samples;

    let mut query = Query::new(&session, &cities.table, Some(cities.name.eq("Prague")));
    let mut row = query.first(&mut session).unwrap().unwrap();

    row.set(&cities.name, "Praha".to_string()).unwrap();
    assert_eq!(row.get(&cities.name).unwrap(), "Praha");
}

#[test]
fn cursor_is_single_pass() {
    let (mut session, samples) = populated();
    let Samples { cities, .. } = &samples;

    let mut query = Query::new(&session, &cities.table, None).order_by(&cities.id, true);

    let iter = query.iter(&mut session).unwrap();
    assert!(iter.has_next());
    assert!(iter.has_next());
    assert_eq!(iter.len(), 3);

    let first = iter.next_row().unwrap();
    assert_eq!(first.get(&cities.name).unwrap(), "St. Petersburg");
    assert_eq!(iter.count(), 2);

    // The same cursor is returned; it does not restart
    let iter = query.iter(&mut session).unwrap();
    assert!(!iter.has_next());
    assert!(iter.next_row().unwrap_err().is_record_not_found());
}
