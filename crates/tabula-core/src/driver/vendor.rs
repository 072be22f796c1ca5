use crate::schema::ColumnDef;
use std::borrow::Cow;

/// Database vendors with dialect differences the query layer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Sqlite,
    Mysql,
    Postgresql,
    H2,
}

/// Words that must be quoted when used as identifiers.
const RESERVED: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "AS", "ASC", "BETWEEN", "BY", "CASE", "CHECK", "COLUMN",
    "CONSTRAINT", "CREATE", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "EXISTS",
    "FOREIGN", "FROM", "FULL", "GROUP", "HAVING", "IN", "INDEX", "INNER", "INSERT", "INTO", "IS",
    "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "NOT", "NULL", "OFFSET", "ON", "OR", "ORDER",
    "PRIMARY", "REFERENCES", "RIGHT", "SELECT", "SET", "TABLE", "THEN", "TO", "UNION", "UNIQUE",
    "UPDATE", "USER", "VALUES", "WHEN", "WHERE",
];

impl Vendor {
    /// Quotes `name` if it is not a plain identifier or is a reserved word.
    pub fn identity<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if !needs_quotes(name) {
            return Cow::Borrowed(name);
        }

        let quote = self.quote_char();
        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push(quote);
        for c in name.chars() {
            if c == quote {
                quoted.push(quote);
            }
            quoted.push(c);
        }
        quoted.push(quote);
        Cow::Owned(quoted)
    }

    /// `table.column`, each part quoted as needed.
    pub fn full_identity(&self, column: &ColumnDef) -> String {
        format!(
            "{}.{}",
            self.identity(&column.table),
            self.identity(&column.name)
        )
    }

    /// Keyword marking a column as auto-increment in DDL.
    pub fn auto_increment(&self) -> &'static str {
        match self {
            Vendor::Sqlite => "AUTOINCREMENT",
            Vendor::Mysql | Vendor::H2 => "AUTO_INCREMENT",
            Vendor::Postgresql => "GENERATED BY DEFAULT AS IDENTITY",
        }
    }

    /// Placeholder for the `n`-th (1-based) positional parameter.
    pub fn placeholder(&self, n: usize) -> Cow<'static, str> {
        match self {
            Vendor::Postgresql => Cow::Owned(format!("${n}")),
            _ => Cow::Borrowed("?"),
        }
    }

    fn quote_char(&self) -> char {
        match self {
            Vendor::Mysql => '`',
            _ => '"',
        }
    }
}

fn needs_quotes(name: &str) -> bool {
    let mut chars = name.chars();
    let plain = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    !plain
        || RESERVED
            .iter()
            .any(|word| word.eq_ignore_ascii_case(name))
}
