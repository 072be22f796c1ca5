//! The `Cities`/`Users` schema most scenarios run against.

use std::sync::Arc;
use tabula::{schema::Table, Column, Insert, Result, Session, TableBuilder};

pub struct Cities {
    pub table: Arc<Table>,
    pub id: Column<i32>,
    pub name: Column<String>,
}

pub struct Users {
    pub table: Arc<Table>,
    pub id: Column<String>,
    pub name: Column<String>,
    pub city_id: Column<Option<i32>>,
}

pub struct Samples {
    pub cities: Cities,
    pub users: Users,
}

impl Cities {
    pub fn new() -> Result<Cities> {
        let mut table = TableBuilder::new("Cities");
        let id = table.integer("id").auto_increment().primary_key().add()?;
        let name = table.varchar("name", 50).add()?;

        Ok(Cities {
            table: table.build(),
            id,
            name,
        })
    }
}

impl Users {
    pub fn new(cities: &Cities) -> Result<Users> {
        let mut table = TableBuilder::new("Users");
        let id = table.varchar("id", 10).primary_key().add()?;
        let name = table.varchar("name", 50).add()?;
        let city_id = table.opt_reference("city_id", &cities.id).add()?;

        Ok(Users {
            table: table.build(),
            id,
            name,
            city_id,
        })
    }
}

impl Samples {
    pub fn new() -> Result<Samples> {
        let cities = Cities::new()?;
        let users = Users::new(&cities)?;
        Ok(Samples { cities, users })
    }

    /// Creates both tables.
    pub fn create(&self, session: &mut Session) -> Result<()> {
        session.create(&[&self.cities.table, &self.users.table])
    }

    /// Three cities and five users: two users live in a city, two have no
    /// city, and "smth" matches the `%thing` pattern.
    pub fn populate(&self, session: &mut Session) -> Result<()> {
        let Samples { cities, users } = self;

        let mut city_ids = vec![];
        for name in ["St. Petersburg", "Munich", "Prague"] {
            let row = Insert::new(&cities.table)
                .set(&cities.name, name)?
                .execute(session)?;
            city_ids.push(row.get(&cities.id)?);
        }

        let rows = [
            ("andrey", "Andrey", Some(city_ids[0])),
            ("sergey", "Sergey", Some(city_ids[1])),
            ("eugene", "Eugene", None),
            ("alex", "Alex", None),
            ("smth", "Something", None),
        ];

        for (id, name, city_id) in rows {
            Insert::new(&users.table)
                .set(&users.id, id)?
                .set(&users.name, name)?
                .set(&users.city_id, city_id)?
                .execute(session)?;
        }

        Ok(())
    }
}
