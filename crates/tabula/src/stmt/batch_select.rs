use super::{query::read_count, Query};
use crate::{cursor::ResultIter, Result, Session};

use tabula_core::Error;

/// Runs several queries in one round trip.
///
/// Each query renders itself; counting queries select `COUNT(*)`. Results
/// are matched back to their query by position and stored in that query's
/// count or row cache, so a following `count`, `iter` or `first` does not
/// touch the database.
pub fn batch_select(session: &mut Session, queries: &mut [&mut Query]) -> Result<()> {
    if queries.is_empty() {
        return Ok(());
    }

    let mut statements = Vec::with_capacity(queries.len());

    for query in queries.iter() {
        session.flush_tables(&query.set().source().table_names())?;

        let mut builder = session.query_builder();
        let sql = query.to_sql(&mut builder, query.is_counting())?;
        statements.push((sql, builder.params()?));
    }

    let sql = statements
        .iter()
        .map(|(sql, _)| sql.as_str())
        .collect::<Vec<_>>()
        .join(";");
    let args = statements.iter().map(|(_, params)| params.len()).sum();

    tracing::debug!(
        queries = statements.len(),
        multi_statement = session.capability().multi_statement,
        "batch select"
    );

    let results = session.exec(&sql, args, |connection| {
        connection.query_batch(&statements)
    })?;

    if results.len() != queries.len() {
        return Err(Error::invalid_record_count(format!(
            "batch of {} queries returned {} result sets",
            queries.len(),
            results.len()
        )));
    }

    for (query, rows) in queries.iter_mut().zip(results) {
        if query.is_counting() {
            query.count_cache = Some(read_count(rows)?);
        } else {
            query.result_cache = Some(ResultIter::new(rows, query.fields()?));
        }
    }

    Ok(())
}
