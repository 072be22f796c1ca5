use crate::Result;

use chrono::FixedOffset;
use indexmap::IndexMap;
use tabula_core::{driver::Vendor, schema::ColumnType, stmt};

/// Maps the projected expressions of a result set to their slot.
///
/// Expressions are keyed by their literal SQL, so two expressions that
/// render identically share a slot. Slots are in first-seen order.
#[derive(Debug)]
pub(crate) struct Fields {
    vendor: Vendor,
    time_zone: FixedOffset,
    index: IndexMap<String, ColumnType>,
}

impl Fields {
    pub(crate) fn new<'a>(
        vendor: Vendor,
        time_zone: FixedOffset,
        exprs: impl IntoIterator<Item = &'a stmt::Expr>,
    ) -> Result<Fields> {
        let mut fields = Fields {
            vendor,
            time_zone,
            index: IndexMap::new(),
        };

        for expr in exprs {
            let key = fields.key(expr)?;
            fields.index.entry(key).or_insert_with(|| expr.column_type());
        }

        Ok(fields)
    }

    pub(crate) fn key(&self, expr: &stmt::Expr) -> Result<String> {
        expr.literal_sql(self.vendor, self.time_zone)
    }

    pub(crate) fn slot(&self, key: &str) -> Option<(usize, &ColumnType)> {
        self.index.get_full(key).map(|(index, _, ty)| (index, ty))
    }

    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.keys().map(String::as_str)
    }
}
