/// An index over an ordered tuple of columns of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// Column names, in index order
    pub columns: Vec<String>,

    pub unique: bool,
}

impl Index {
    pub fn new(columns: impl IntoIterator<Item = impl Into<String>>, unique: bool) -> Index {
        Index {
            columns: columns.into_iter().map(Into::into).collect(),
            unique,
        }
    }

    /// Index name derived from the table and its columns, e.g.
    /// `Users_name_unique`.
    pub fn name(&self, table: &str) -> String {
        let mut name = String::from(table);
        for column in &self.columns {
            name.push('_');
            name.push_str(column);
        }
        if self.unique {
            name.push_str("_unique");
        }
        name
    }
}
