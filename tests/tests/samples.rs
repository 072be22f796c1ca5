use pretty_assertions::assert_eq;
use tabula::{Delete, Join, Query};
use tests::{samples::Samples, setup};

#[test]
fn samples() {
    let mut session = setup();
    let samples = Samples::new().unwrap();
    samples.create(&mut session).unwrap();
    samples.populate(&mut session).unwrap();

    let Samples { cities, users } = &samples;

    // SELECT * FROM Cities WHERE name = 'Munich'
    let mut munich = Query::new(&session, &cities.table, Some(cities.name.eq("Munich")));
    let rows: Vec<_> = munich.iter(&mut session).unwrap().collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get(&cities.name).unwrap(), "Munich");

    let deleted = Delete::new(&users.table)
        .filter(users.name.like("%thing"))
        .execute(&mut session)
        .unwrap();
    assert_eq!(deleted, 1);

    let mut query = Join::new(&users.table)
        .inner_join(&cities.table)
        .unwrap()
        .slice(&[&users.name, &cities.name])
        .select(
            &session,
            users.id.eq("andrey").and(cities.name.eq("St. Petersburg")),
        );

    let rows: Vec<_> = query.iter(&mut session).unwrap().collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get(&users.name).unwrap(), "Andrey");
    assert_eq!(rows[0].get(&cities.name).unwrap(), "St. Petersburg");

    let mut homeless = Query::new(&session, &users.table, Some(users.city_id.is_null()));
    assert_eq!(homeless.count(&mut session).unwrap(), 2);
}

#[test]
fn users_per_city() {
    let mut session = setup();
    let samples = Samples::new().unwrap();
    samples.create(&mut session).unwrap();
    samples.populate(&mut session).unwrap();

    let Samples { cities, users } = &samples;
    let user_count = users.id.count();

    let mut query = Join::new(&cities.table)
        .left_join(&users.table)
        .unwrap()
        .slice(&[&cities.name, &user_count])
        .select_all(&session)
        .group_by(&cities.name)
        .order_by(&cities.name, true);

    let counts: Vec<(String, i64)> = query
        .iter(&mut session)
        .unwrap()
        .map(|row| (row.get(&cities.name).unwrap(), row.get(&user_count).unwrap()))
        .collect();

    assert_eq!(
        counts,
        [
            ("Munich".to_string(), 1),
            ("Prague".to_string(), 0),
            ("St. Petersburg".to_string(), 1),
        ]
    );
}
