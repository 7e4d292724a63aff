//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by concern.

mod entries;
mod filters;
mod stats;

use std::time::Duration;

use historical_news_core::{
    DayMonth, Entry, TagList, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect a pool. Does not touch the schema.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the archive table and its lookup indexes if they are missing.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        run_pg_migrations(&self.pool).await.map_err(|e| StorageError::Migration(format!("{e:#}")))
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Select list shared by every entry query. Casts pin the decoded Rust types
/// regardless of the integer and float widths the ingestion side chose.
pub(crate) const ENTRY_COLUMNS: &str =
    "id::BIGINT AS id, date, day_month, year::INTEGER AS year, month::INTEGER AS month,
     place, place_corrected, latitude::DOUBLE PRECISION AS latitude,
     longitude::DOUBLE PRECISION AS longitude, content, words";

pub(crate) fn row_to_entry(row: &PgRow) -> Result<Entry, StorageError> {
    let id: i64 = row.try_get("id")?;
    let raw_key: String = row.try_get("day_month")?;
    let day_month: DayMonth = raw_key
        .parse()
        .map_err(|e| StorageError::corrupt(format!("entry {id}: day_month '{raw_key}'"), e))?;
    let words: Option<String> = row.try_get("words")?;
    let content: Option<String> = row.try_get("content")?;
    Ok(Entry {
        id,
        date: row.try_get("date")?,
        day_month,
        year: row.try_get("year")?,
        month: row.try_get("month")?,
        place: row.try_get("place")?,
        place_corrected: row.try_get("place_corrected")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        content: content.unwrap_or_default(),
        words: words.as_deref().map(TagList::parse).unwrap_or_default(),
    })
}

/// Escape LIKE metacharacters so user input matches literally.
pub(crate) fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// `%needle%` pattern for substring matches.
pub(crate) fn contains_pattern(needle: &str) -> String {
    format!("%{}%", escape_like(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_neutralises_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like(r"c:\x"), r"c:\\x");
    }

    #[test]
    fn contains_pattern_wraps_escaped_needle() {
        assert_eq!(contains_pattern("Oslo"), "%Oslo%");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
    }
}
