use super::{Comma, Formatter, Ident, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::AddColumn(stmt) => stmt.to_sql(f),
            Statement::CreateIndex(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropColumn(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::ModifyColumn(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);
        fmt!(f, "CREATE TABLE IF NOT EXISTS " name);

        if self.columns.is_empty() {
            return;
        }

        let columns = Comma(&self.columns);
        fmt!(f, " (" columns);

        if let Some(pk) = &self.primary_key {
            let pk = Comma(pk.iter().map(Ident));
            fmt!(f, ", PRIMARY KEY (" pk ")");
        }

        for fk in &self.foreign_keys {
            fmt!(f, ", " fk);
        }

        fmt!(f, ")");
    }
}

impl ToSql for &stmt::ForeignKey {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = Ident(&self.column);
        let table = Ident(&self.references_table);
        let references = Ident(&self.references_column);

        fmt!(f, "FOREIGN KEY (" column ") REFERENCES " table "(" references ")");

        if let Some(on_delete) = self.on_delete {
            let on_delete = on_delete.to_string();
            let on_delete = &on_delete;
            fmt!(f, " ON DELETE " on_delete);
        }
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        let name = Ident(&self.name);

        fmt!(f, "DROP TABLE " if_exists name);
    }
}

impl ToSql for &stmt::AddColumn {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(&self.table);
        let column = &self.column;
        fmt!(f, "ALTER TABLE " table " ADD COLUMN " column);
    }
}

impl ToSql for &stmt::ModifyColumn {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(&self.table);
        let column = &self.column;
        fmt!(f, "ALTER TABLE " table " MODIFY COLUMN " column);
    }
}

impl ToSql for &stmt::DropColumn {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(&self.table);
        let name = Ident(&self.name);
        fmt!(f, "ALTER TABLE " table " DROP COLUMN " name);
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let unique = if self.unique { "UNIQUE " } else { "" };
        let name = Ident(&self.name);
        let table = Ident(&self.on);
        let columns = Comma(self.columns.iter().map(Ident));

        fmt!(f, "CREATE " unique "INDEX " name " ON " table " (" columns ")");
    }
}
