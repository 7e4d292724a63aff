//! EntryStore implementation for PgStorage.

use async_trait::async_trait;
use historical_news_core::{DayMonth, Entry, YearRange, ENTRY_TABLE};

use super::filters::month_entries_query;
use super::{contains_pattern, row_to_entry, PgStorage, ENTRY_COLUMNS};
use crate::error::StorageError;
use crate::traits::EntryStore;

impl PgStorage {
    async fn fetch_entries_matching(
        &self,
        predicate: &str,
        pattern: String,
    ) -> Result<Vec<Entry>, StorageError> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM {ENTRY_TABLE} WHERE {predicate} ORDER BY date ASC, id ASC"
        );
        let rows = sqlx::query(&sql).bind(pattern).fetch_all(&self.pool).await?;
        rows.iter().map(row_to_entry).collect()
    }
}

#[async_trait]
impl EntryStore for PgStorage {
    async fn entries_for_day_month(&self, key: DayMonth) -> Result<Vec<Entry>, StorageError> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM {ENTRY_TABLE} WHERE day_month = $1 ORDER BY year ASC, id ASC"
        );
        let rows = sqlx::query(&sql).bind(key.to_string()).fetch_all(&self.pool).await?;
        rows.iter().map(row_to_entry).collect()
    }

    async fn get_entry(&self, id: i64) -> Result<Option<Entry>, StorageError> {
        let sql = format!("SELECT {ENTRY_COLUMNS} FROM {ENTRY_TABLE} WHERE id = $1");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.map(|r| row_to_entry(&r)).transpose()
    }

    async fn entries_by_tag(&self, tag: &str) -> Result<Vec<Entry>, StorageError> {
        self.fetch_entries_matching("words LIKE $1", contains_pattern(tag)).await
    }

    async fn search_content(&self, query: &str) -> Result<Vec<Entry>, StorageError> {
        self.fetch_entries_matching("content ILIKE $1", contains_pattern(query)).await
    }

    async fn entries_by_city(&self, city: &str) -> Result<Vec<Entry>, StorageError> {
        self.fetch_entries_matching("place_corrected LIKE $1", contains_pattern(city)).await
    }

    async fn entries_for_month(
        &self,
        month: u32,
        range: YearRange,
    ) -> Result<Vec<Entry>, StorageError> {
        let mut qb = month_entries_query(month, range);
        let rows = qb.build().fetch_all(&self.pool).await?;
        rows.iter().map(row_to_entry).collect()
    }
}
