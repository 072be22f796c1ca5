use super::{ColumnSet, FieldSet};
use crate::{
    stmt::{Expr, Projection, Query},
    Result, Session,
};

use chrono::FixedOffset;
use std::{fmt, sync::Arc};
use tabula_core::{
    driver::Vendor,
    schema::{ColumnDef, Table},
    stmt, Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

/// One joined table with its key pair and optional extra constraint.
#[derive(Debug, Clone)]
pub struct JoinPart {
    pub join_type: JoinType,
    pub table: Arc<Table>,

    /// Left side of the `ON` equality
    pub pk: stmt::Expr,

    /// Right side of the `ON` equality
    pub fk: stmt::Expr,

    /// ANDed onto the key equality
    pub extra: Option<stmt::Expr>,
}

/// A base table followed by joined tables, in the order they were added.
#[derive(Debug, Clone)]
pub struct Join {
    table: Arc<Table>,
    parts: Vec<JoinPart>,
}

impl Join {
    pub fn new(table: &Arc<Table>) -> Join {
        Join {
            table: table.clone(),
            parts: vec![],
        }
    }

    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    pub fn parts(&self) -> &[JoinPart] {
        &self.parts
    }

    pub fn inner_join(self, other: &Arc<Table>) -> Result<Join> {
        self.join(other, JoinType::Inner)
    }

    pub fn left_join(self, other: &Arc<Table>) -> Result<Join> {
        self.join(other, JoinType::Left)
    }

    /// Joins `other` on a key pair inferred from foreign-key declarations.
    pub fn join(self, other: &Arc<Table>, join_type: JoinType) -> Result<Join> {
        self.join_with(other, join_type, None)
    }

    /// Like [`join`](Self::join), with an extra predicate ANDed onto the
    /// inferred key equality.
    ///
    /// The first column of this join referenced by a column of `other` is
    /// used; failing that, the first column of `other` referenced by a
    /// column of this join. Ambiguous relationships are not detected.
    pub fn join_with(
        self,
        other: &Arc<Table>,
        join_type: JoinType,
        extra: Option<Expr<bool>>,
    ) -> Result<Join> {
        let columns = self.columns();
        let keys = find_keys(&columns, &other.columns).or_else(|| find_keys(&other.columns, &columns));

        let Some((pk, fk)) = keys else {
            return Err(Error::invalid_schema(format!(
                "cannot join {} with {} as there is no matching primary key/foreign key pair",
                self.table.name, other.name
            )));
        };

        Ok(self.push(JoinPart {
            join_type,
            table: other.clone(),
            pk: stmt::Expr::column(&pk),
            fk: stmt::Expr::column(&fk),
            extra: extra.map(Expr::into_untyped),
        }))
    }

    /// Joins `other` on explicitly given key expressions.
    pub fn join_on(
        self,
        other: &Arc<Table>,
        join_type: JoinType,
        on: &dyn Projection,
        other_column: &dyn Projection,
        extra: Option<Expr<bool>>,
    ) -> Join {
        self.push(JoinPart {
            join_type,
            table: other.clone(),
            pk: on.to_untyped(),
            fk: other_column.to_untyped(),
            extra: extra.map(Expr::into_untyped),
        })
    }

    fn push(mut self, part: JoinPart) -> Join {
        self.parts.push(part);
        self
    }

    /// Tables in join order, starting with the base table.
    pub fn tables(&self) -> impl Iterator<Item = &Arc<Table>> + '_ {
        std::iter::once(&self.table).chain(self.parts.iter().map(|part| &part.table))
    }

    pub fn columns(&self) -> Vec<Arc<ColumnDef>> {
        self.tables()
            .flat_map(|table| table.columns.iter().cloned())
            .collect()
    }

    /// Renders the `FROM` clause body.
    pub fn describe(&self, vendor: Vendor, time_zone: FixedOffset) -> Result<String> {
        let mut sql = vendor.identity(&self.table.name).into_owned();

        for part in &self.parts {
            sql.push_str(&format!(
                " {} JOIN {} ON {} = {}",
                part.join_type,
                vendor.identity(&part.table.name),
                part.pk.literal_sql(vendor, time_zone)?,
                part.fk.literal_sql(vendor, time_zone)?,
            ));

            if let Some(extra) = &part.extra {
                sql.push_str(&format!(" AND ({})", extra.literal_sql(vendor, time_zone)?));
            }
        }

        Ok(sql)
    }

    pub fn slice(self, fields: &[&dyn Projection]) -> FieldSet {
        ColumnSet::from(self).slice(fields)
    }

    pub fn select(self, session: &Session, predicate: Expr<bool>) -> Query {
        FieldSet::from(self).select(session, predicate)
    }

    pub fn select_all(self, session: &Session) -> Query {
        FieldSet::from(self).select_all(session)
    }
}

fn find_keys(a: &[Arc<ColumnDef>], b: &[Arc<ColumnDef>]) -> Option<(Arc<ColumnDef>, Arc<ColumnDef>)> {
    a.iter().find_map(|pk| {
        b.iter()
            .find(|fk| fk.references_column(pk))
            .map(|fk| (pk.clone(), fk.clone()))
    })
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JoinType::Inner => "INNER",
            JoinType::Left => "LEFT",
            JoinType::Right => "RIGHT",
            JoinType::Full => "FULL",
        })
    }
}
