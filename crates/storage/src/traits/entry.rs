use async_trait::async_trait;
use historical_news_core::{DayMonth, Entry, YearRange};

use crate::error::StorageError;

/// Row-returning reads on the archive table.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// All entries sharing a day-of-year key, earliest year first.
    async fn entries_for_day_month(&self, key: DayMonth) -> Result<Vec<Entry>, StorageError>;

    /// Single entry by id.
    async fn get_entry(&self, id: i64) -> Result<Option<Entry>, StorageError>;

    /// Entries whose encoded tag list contains `tag` (case-sensitive), by date.
    async fn entries_by_tag(&self, tag: &str) -> Result<Vec<Entry>, StorageError>;

    /// Entries whose content contains `query` (case-insensitive), by date.
    async fn search_content(&self, query: &str) -> Result<Vec<Entry>, StorageError>;

    /// Entries whose corrected place contains `city` (case-sensitive), by date.
    async fn entries_by_city(&self, city: &str) -> Result<Vec<Entry>, StorageError>;

    /// Entries published in `month` (1-12) within the year bounds, by date.
    async fn entries_for_month(
        &self,
        month: u32,
        range: YearRange,
    ) -> Result<Vec<Entry>, StorageError>;
}
