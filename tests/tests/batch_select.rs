use pretty_assertions::assert_eq;
use tabula::{batch_select, Query};
use tests::{samples::Samples, setup_logged};

#[test]
fn results_are_routed_to_their_query() {
    let (mut session, mut log) = setup_logged();
    let samples = Samples::new().unwrap();
    samples.create(&mut session).unwrap();
    samples.populate(&mut session).unwrap();

    let Samples { cities, users } = &samples;

    let mut homeless = Query::new(&session, &users.table, Some(users.city_id.is_null())).counting();
    let mut ordered = Query::new(&session, &cities.table, None).order_by(&cities.name, false);

    log.clear();
    batch_select(&mut session, &mut [&mut homeless, &mut ordered]).unwrap();

    assert_eq!(
        log.sql(),
        [
            "SELECT COUNT(*) FROM Users WHERE Users.city_id IS NULL",
            "SELECT Cities.id, Cities.name FROM Cities ORDER BY Cities.name DESC",
        ]
    );

    // Served from the query caches
    log.clear();
    assert_eq!(homeless.count(&mut session).unwrap(), 3);

    let names: Vec<String> = ordered
        .iter(&mut session)
        .unwrap()
        .map(|row| row.get(&cities.name).unwrap())
        .collect();
    assert_eq!(names, ["St. Petersburg", "Prague", "Munich"]);
    assert!(log.is_empty());
}

#[test]
fn empty_batch() {
    let (mut session, log) = setup_logged();
    batch_select(&mut session, &mut []).unwrap();
    assert!(log.is_empty());
}
