use chrono::Offset;
use pretty_assertions::assert_eq;
use tabula::{Join, JoinType, TableBuilder};
use tabula_core::driver::Vendor;
use tests::samples::Samples;

fn describe(join: &Join) -> String {
    join.describe(Vendor::Sqlite, chrono::Utc.fix()).unwrap()
}

#[test]
fn infers_key_from_foreign_key() {
    let Samples { cities, users } = Samples::new().unwrap();

    let join = Join::new(&users.table).inner_join(&cities.table).unwrap();
    assert_eq!(
        describe(&join),
        "Users INNER JOIN Cities ON Cities.id = Users.city_id"
    );

    let join = Join::new(&cities.table).left_join(&users.table).unwrap();
    assert_eq!(
        describe(&join),
        "Cities LEFT JOIN Users ON Cities.id = Users.city_id"
    );
}

#[test]
fn extra_constraint_is_anded() {
    let Samples { cities, users } = Samples::new().unwrap();

    let join = Join::new(&users.table)
        .join_with(
            &cities.table,
            JoinType::Inner,
            Some(cities.name.ne("Prague")),
        )
        .unwrap();

    assert_eq!(
        describe(&join),
        "Users INNER JOIN Cities ON Cities.id = Users.city_id AND (Cities.name <> 'Prague')"
    );
}

#[test]
fn explicit_keys() {
    let Samples { cities, users } = Samples::new().unwrap();

    let join = Join::new(&users.table).join_on(
        &cities.table,
        JoinType::Right,
        &users.name,
        &cities.name,
        None,
    );

    assert_eq!(
        describe(&join),
        "Users RIGHT JOIN Cities ON Users.name = Cities.name"
    );
}

#[test]
fn parts_keep_insertion_order() {
    let Samples { cities, users } = Samples::new().unwrap();

    let mut visits = TableBuilder::new("Visits");
    visits.integer("id").auto_increment().primary_key().add().unwrap();
    visits.reference("user_id", &users.id).add().unwrap();
    let visits = visits.build();

    let join = Join::new(&visits)
        .inner_join(&users.table)
        .unwrap()
        .left_join(&cities.table)
        .unwrap();

    assert_eq!(
        describe(&join),
        "Visits INNER JOIN Users ON Users.id = Visits.user_id \
         LEFT JOIN Cities ON Cities.id = Users.city_id"
    );

    let tables: Vec<_> = join.tables().map(|table| table.name.to_string()).collect();
    assert_eq!(tables, ["Visits", "Users", "Cities"]);
}

#[test]
fn unrelated_tables_fail() {
    let Samples { cities, .. } = Samples::new().unwrap();

    let mut countries = TableBuilder::new("Countries");
    countries.integer("id").primary_key().add().unwrap();
    let countries = countries.build();

    let err = Join::new(&cities.table).inner_join(&countries).unwrap_err();
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: cannot join Cities with Countries as there is no matching \
         primary key/foreign key pair"
    );
}
