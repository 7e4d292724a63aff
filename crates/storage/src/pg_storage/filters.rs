//! Query builders for the reads whose WHERE clause depends on optional input.

use historical_news_core::{YearRange, ENTRY_TABLE};
use sqlx::{Postgres, QueryBuilder};

use super::ENTRY_COLUMNS;

/// Append inclusive year bounds. `joiner` is the keyword that introduces the
/// first condition (`" WHERE "` or `" AND "`).
pub(crate) fn push_year_bounds(
    qb: &mut QueryBuilder<'_, Postgres>,
    range: YearRange,
    joiner: &'static str,
) {
    let mut joiner = joiner;
    if let Some(from) = range.from {
        qb.push(joiner).push("year >= ").push_bind(from);
        joiner = " AND ";
    }
    if let Some(to) = range.to {
        qb.push(joiner).push("year <= ").push_bind(to);
    }
}

pub(crate) fn monthly_counts_query(range: YearRange) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!(
        "SELECT month::INTEGER AS month, COUNT(*) AS article_count FROM {ENTRY_TABLE}"
    ));
    push_year_bounds(&mut qb, range, " WHERE ");
    qb.push(" GROUP BY month ORDER BY month ASC");
    qb
}

pub(crate) fn month_entries_query(month: u32, range: YearRange) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!(
        "SELECT {ENTRY_COLUMNS} FROM {ENTRY_TABLE} WHERE EXTRACT(MONTH FROM date)::INTEGER = "
    ));
    qb.push_bind(i32::try_from(month).unwrap_or(i32::MAX));
    push_year_bounds(&mut qb, range, " AND ");
    qb.push(" ORDER BY date ASC, id ASC");
    qb
}
