use std::fmt;

/// Action taken on referencing rows when the referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceOption {
    Cascade,
    SetNull,
    Restrict,
    NoAction,
}

impl fmt::Display for ReferenceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReferenceOption::Cascade => "CASCADE",
            ReferenceOption::SetNull => "SET NULL",
            ReferenceOption::Restrict => "RESTRICT",
            ReferenceOption::NoAction => "NO ACTION",
        })
    }
}
