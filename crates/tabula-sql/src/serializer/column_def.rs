use super::{Formatter, Ident, ToSql};

use crate::stmt;
use tabula_core::{driver::Vendor, Error};

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let vendor = f.serializer.vendor();
        let name = Ident(&self.name);

        // SQLite only honors AUTOINCREMENT on an `INTEGER PRIMARY KEY` column
        if self.ty.auto_increment && vendor == Vendor::Sqlite {
            if !self.primary_key {
                f.fail(Error::invalid_schema(format!(
                    "auto-increment column {} must be the table's only primary key on SQLite",
                    self.name
                )));
                return;
            }

            fmt!(f, name " INTEGER PRIMARY KEY AUTOINCREMENT");
        } else {
            let ty = self.ty.sql_type();
            let ty = &ty;
            fmt!(f, name " " ty);

            if self.primary_key {
                fmt!(f, " PRIMARY KEY");
            }

            if self.ty.auto_increment {
                fmt!(f, " " vendor.auto_increment());
            }
        }

        if self.ty.nullable {
            fmt!(f, " NULL");
        } else {
            fmt!(f, " NOT NULL");
        }

        if let Some(default) = &self.default {
            match self.ty.value_to_string(default, &f.serializer.time_zone) {
                Ok(literal) => {
                    let literal = &literal;
                    fmt!(f, " DEFAULT " literal);
                }
                Err(err) => f.fail(err.context(tabula_core::err!(
                    "invalid default for column {}",
                    self.name
                ))),
            }
        }
    }
}
