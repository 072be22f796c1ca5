use super::{Formatter, ToSql};

/// An identifier, quoted when the vendor requires it.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let ident = f.serializer.vendor().identity(self.0.as_ref()).into_owned();
        f.dst.push_str(&ident);
    }
}
