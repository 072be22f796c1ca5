use super::{Expr, IntoExpr, Projection};
use crate::{
    cursor::{Fields, ResultIter, ResultRow},
    schema::FieldSet,
    Result, Session,
};

use chrono::FixedOffset;
use indexmap::IndexMap;
use std::sync::Arc;
use tabula_core::{
    driver::{Rows, Vendor},
    schema::{ColumnType, Type},
    stmt::{self, QueryBuilder},
    Error,
};

/// A `SELECT` over a [`FieldSet`].
///
/// The row iterator, the row count and the emptiness check are each
/// computed at most once per query and kept for its lifetime. Build a new
/// query to run it again.
#[derive(Debug)]
pub struct Query {
    set: FieldSet,
    filter: Option<stmt::Expr>,
    group_by: Vec<stmt::Expr>,
    having: Option<stmt::Expr>,

    /// Expression and ascending flag
    order_by: Vec<(stmt::Expr, bool)>,
    limit: Option<u64>,
    offset: Option<u64>,
    for_update: bool,

    /// Selects `COUNT(*)` when submitted through `batch_select`
    counting: bool,

    vendor: Vendor,
    time_zone: FixedOffset,

    pub(crate) empty_cache: Option<bool>,
    pub(crate) count_cache: Option<u64>,
    pub(crate) result_cache: Option<ResultIter>,
}

impl Query {
    pub fn new(session: &Session, set: impl Into<FieldSet>, filter: Option<Expr<bool>>) -> Query {
        Query {
            set: set.into(),
            filter: filter.map(Expr::into_untyped),
            group_by: vec![],
            having: None,
            order_by: vec![],
            limit: None,
            offset: None,
            for_update: session.selects_for_update() && session.vendor_supports_for_update(),
            counting: false,
            vendor: session.vendor(),
            time_zone: session.time_zone(),
            empty_cache: None,
            count_cache: None,
            result_cache: None,
        }
    }

    pub fn set(&self) -> &FieldSet {
        &self.set
    }

    pub fn for_update(mut self) -> Self {
        self.for_update = true;
        self
    }

    pub fn not_for_update(mut self) -> Self {
        self.for_update = false;
        self
    }

    pub fn group_by(mut self, column: &dyn Projection) -> Self {
        self.group_by.push(column.to_untyped());
        self
    }

    /// Sets the `HAVING` predicate. A query has at most one.
    pub fn having(mut self, predicate: impl IntoExpr<bool>) -> Result<Self> {
        let predicate = predicate
            .into_expr(&ColumnType::new(Type::Boolean))
            .into_untyped();

        if let Some(having) = &self.having {
            return Err(Error::invalid_statement(format!(
                "HAVING clause is specified twice. Old value = '{}', new value = '{}'",
                having.literal_sql(self.vendor, self.time_zone)?,
                predicate.literal_sql(self.vendor, self.time_zone)?,
            )));
        }

        self.having = Some(predicate);
        Ok(self)
    }

    pub fn order_by(mut self, column: &dyn Projection, ascending: bool) -> Self {
        self.order_by.push((column.to_untyped(), ascending));
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Rendered only when a limit is set.
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Marks the query as a count query for [`batch_select`](super::batch_select).
    pub fn counting(mut self) -> Self {
        self.counting = true;
        self
    }

    pub fn is_counting(&self) -> bool {
        self.counting
    }

    /// Projected expressions keyed by their literal SQL, first seen first.
    fn projection(&self) -> Result<IndexMap<String, &stmt::Expr>> {
        let mut fields = IndexMap::new();
        for field in self.set.fields() {
            let key = field.literal_sql(self.vendor, self.time_zone)?;
            fields.entry(key).or_insert(field);
        }
        Ok(fields)
    }

    pub(crate) fn fields(&self) -> Result<Arc<Fields>> {
        let projection = self.projection()?;
        Ok(Arc::new(Fields::new(
            self.vendor,
            self.time_zone,
            projection.into_values(),
        )?))
    }

    /// Renders the statement, registering arguments with `builder`. With
    /// `count`, selects `COUNT(*)` and leaves out grouping, ordering and
    /// paging.
    pub fn to_sql(&self, builder: &mut QueryBuilder, count: bool) -> Result<String> {
        let source = self.set.source().describe(self.vendor, self.time_zone)?;
        let mut sql = String::from("SELECT ");

        if count {
            sql.push_str("COUNT(*)");
        } else {
            let fields = self
                .projection()?
                .into_values()
                .map(|field| field.to_sql(builder))
                .collect::<Result<Vec<_>>>()?;
            sql.push_str(&fields.join(", "));
        }

        sql.push_str(" FROM ");
        sql.push_str(&source);

        if let Some(filter) = &self.filter {
            sql.push_str(" WHERE ");
            sql.push_str(&filter.to_sql(builder)?);
        }

        if !count {
            if !self.group_by.is_empty() {
                let columns = self
                    .group_by
                    .iter()
                    .map(|column| column.to_sql(builder))
                    .collect::<Result<Vec<_>>>()?;
                sql.push_str(" GROUP BY ");
                sql.push_str(&columns.join(", "));
            }

            if let Some(having) = &self.having {
                sql.push_str(" HAVING ");
                sql.push_str(&having.to_sql(builder)?);
            }

            if !self.order_by.is_empty() {
                let columns = self
                    .order_by
                    .iter()
                    .map(|(column, ascending)| {
                        let order = if *ascending { "ASC" } else { "DESC" };
                        Ok(format!("{} {order}", column.to_sql(builder)?))
                    })
                    .collect::<Result<Vec<_>>>()?;
                sql.push_str(" ORDER BY ");
                sql.push_str(&columns.join(", "));
            }

            if let Some(limit) = self.limit {
                sql.push_str(&format!(" LIMIT {limit}"));

                if let Some(offset) = self.offset {
                    sql.push_str(&format!(" OFFSET {offset}"));
                }
            }
        }

        if self.for_update {
            sql.push_str(" FOR UPDATE");
        }

        tracing::trace!(sql, "generated query");
        Ok(sql)
    }

    fn flush_entities(&self, session: &mut Session) -> Result<()> {
        session.flush_tables(&self.set.source().table_names())
    }

    fn run(&self, session: &mut Session, count: bool) -> Result<Rows> {
        let mut builder = session.query_builder();
        let sql = self.to_sql(&mut builder, count)?;
        session.query(&sql, &builder.params()?)
    }

    /// Executes the query on first use and returns the row cursor.
    pub fn iter(&mut self, session: &mut Session) -> Result<&mut ResultIter> {
        let iter = match self.result_cache.take() {
            Some(iter) => iter,
            None => {
                self.flush_entities(session)?;
                let rows = self.run(session, false)?;
                ResultIter::new(rows, self.fields()?)
            }
        };

        Ok(self.result_cache.insert(iter))
    }

    /// Takes the next row from the query's cursor.
    pub fn first(&mut self, session: &mut Session) -> Result<Option<ResultRow>> {
        Ok(self.iter(session)?.next())
    }

    /// Number of matching rows.
    pub fn count(&mut self, session: &mut Session) -> Result<u64> {
        if let Some(count) = self.count_cache {
            return Ok(count);
        }

        self.flush_entities(session)?;
        let count = read_count(self.run(session, true)?)?;
        self.count_cache = Some(count);
        Ok(count)
    }

    /// Returns `true` if no row matches. Fetches at most one row.
    pub fn is_empty(&mut self, session: &mut Session) -> Result<bool> {
        if let Some(empty) = self.empty_cache {
            return Ok(empty);
        }

        self.flush_entities(session)?;

        let mut builder = session.query_builder();
        let limit = self.limit.replace(1);
        let sql = self.to_sql(&mut builder, false);
        self.limit = limit;
        let sql = sql?;

        let rows = session.query(&sql, &builder.params()?)?;
        let empty = rows.is_empty();
        self.empty_cache = Some(empty);
        Ok(empty)
    }
}

/// Reads the scalar of a `COUNT(*)` result.
pub(crate) fn read_count(mut rows: Rows) -> Result<u64> {
    let value = rows
        .next_row()
        .and_then(|row| row.into_iter().next())
        .ok_or_else(|| Error::invalid_record_count("count query returned no rows"))?;

    match value.as_i64() {
        Some(count) => Ok(u64::try_from(count)?),
        None => Err(Error::type_conversion(value, "BIGINT")),
    }
}
