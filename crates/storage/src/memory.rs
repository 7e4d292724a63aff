//! In-memory store with the same query semantics as `PgStorage`.
//!
//! Counts every store round-trip and can be switched into a failing mode so
//! callers can assert how many queries ran and how faults propagate.
//!
//! Each row keeps the at-rest `words` text next to the decoded entry, and tag
//! matching runs against that text exactly as the `LIKE` on the column does.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use historical_news_core::{
    DayMonth, Entry, MapPoint, MonthCount, TagList, YearCount, YearRange,
};

use crate::error::StorageError;
use crate::traits::{EntryStore, StatsStore};

#[derive(Debug, Clone)]
struct Row {
    entry: Entry,
    raw_words: String,
}

impl From<Entry> for Row {
    fn from(entry: Entry) -> Self {
        Self { raw_words: entry.words.to_storage_string(), entry }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Row>>,
    queries: AtomicUsize,
    failing: AtomicBool,
    fail_after: Mutex<Option<usize>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self { rows: Mutex::new(entries.into_iter().map(Row::from).collect()), ..Self::default() }
    }

    /// Add a row whose `words` column holds the canonical rendering of its tags.
    pub fn insert(&self, entry: Entry) {
        self.push_row(Row::from(entry));
    }

    /// Add a row with `words` exactly as written by the ingestion side.
    /// The entry's tags are decoded from `raw_words`.
    pub fn insert_with_raw_words(&self, mut entry: Entry, raw_words: &str) {
        entry.words = TagList::parse(raw_words);
        self.push_row(Row { entry, raw_words: raw_words.to_owned() });
    }

    fn push_row(&self, row: Row) {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner).push(row);
    }

    /// Number of store round-trips served so far, failed ones included.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Make every subsequent query fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Let `n` queries succeed, then fail every one after.
    pub fn fail_after(&self, n: usize) {
        *self.fail_after.lock().unwrap_or_else(PoisonError::into_inner) = Some(n);
    }

    fn begin_query(&self) -> Result<Vec<Row>, StorageError> {
        let served = self.queries.fetch_add(1, Ordering::SeqCst);
        let limit = *self.fail_after.lock().unwrap_or_else(PoisonError::into_inner);
        let budget_spent = limit.is_some_and(|n| served >= n);
        if self.failing.load(Ordering::SeqCst) || budget_spent {
            return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.rows.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn entries(&self) -> Result<Vec<Entry>, StorageError> {
        Ok(self.begin_query()?.into_iter().map(|row| row.entry).collect())
    }

    fn by_date(mut entries: Vec<Entry>) -> Vec<Entry> {
        entries.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        entries
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn entries_for_day_month(&self, key: DayMonth) -> Result<Vec<Entry>, StorageError> {
        let mut hits: Vec<Entry> =
            self.entries()?.into_iter().filter(|e| e.day_month == key).collect();
        hits.sort_by(|a, b| a.year.cmp(&b.year).then(a.id.cmp(&b.id)));
        Ok(hits)
    }

    async fn get_entry(&self, id: i64) -> Result<Option<Entry>, StorageError> {
        Ok(self.entries()?.into_iter().find(|e| e.id == id))
    }

    async fn entries_by_tag(&self, tag: &str) -> Result<Vec<Entry>, StorageError> {
        let hits = self
            .begin_query()?
            .into_iter()
            .filter(|row| row.raw_words.contains(tag))
            .map(|row| row.entry)
            .collect();
        Ok(Self::by_date(hits))
    }

    async fn search_content(&self, query: &str) -> Result<Vec<Entry>, StorageError> {
        let needle = query.to_lowercase();
        let hits = self
            .entries()?
            .into_iter()
            .filter(|e| e.content.to_lowercase().contains(&needle))
            .collect();
        Ok(Self::by_date(hits))
    }

    async fn entries_by_city(&self, city: &str) -> Result<Vec<Entry>, StorageError> {
        let hits = self
            .entries()?
            .into_iter()
            .filter(|e| e.place_corrected.as_deref().is_some_and(|p| p.contains(city)))
            .collect();
        Ok(Self::by_date(hits))
    }

    async fn entries_for_month(
        &self,
        month: u32,
        range: YearRange,
    ) -> Result<Vec<Entry>, StorageError> {
        use chrono::Datelike;
        let hits = self
            .entries()?
            .into_iter()
            .filter(|e| e.date.month() == month && range.contains(e.year))
            .collect();
        Ok(Self::by_date(hits))
    }
}

#[async_trait]
impl StatsStore for MemoryStore {
    async fn monthly_counts(&self, range: YearRange) -> Result<Vec<MonthCount>, StorageError> {
        let mut counts: BTreeMap<i32, i64> = BTreeMap::new();
        for entry in self.entries()?.iter().filter(|e| range.contains(e.year)) {
            *counts.entry(entry.month).or_default() += 1;
        }
        Ok(counts.into_iter().map(|(month, article_count)| MonthCount { month, article_count }).collect())
    }

    async fn yearly_counts(&self) -> Result<Vec<YearCount>, StorageError> {
        let mut counts: BTreeMap<i32, i64> = BTreeMap::new();
        for entry in &self.entries()? {
            *counts.entry(entry.year).or_default() += 1;
        }
        Ok(counts.into_iter().map(|(year, article_count)| YearCount { year, article_count }).collect())
    }

    async fn map_points(&self) -> Result<Vec<MapPoint>, StorageError> {
        let mut entries = self.entries()?;
        entries.sort_by_key(|e| e.id);
        Ok(entries
            .into_iter()
            .map(|e| MapPoint {
                place_corrected: e.place_corrected,
                latitude: e.latitude,
                longitude: e.longitude,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use historical_news_core::TagList;

    fn entry(id: i64, y: i32, m: u32, d: u32) -> Entry {
        Entry::dated(id, NaiveDate::from_ymd_opt(y, m, d).unwrap(), format!("Entry {id}"))
    }

    #[tokio::test]
    async fn day_month_results_are_ordered_by_year() {
        let store =
            MemoryStore::with_entries(vec![entry(1, 1930, 6, 15), entry(2, 1901, 6, 15), entry(3, 1901, 6, 16)]);
        let hits = store.entries_for_day_month("15-06".parse().unwrap()).await.unwrap();
        assert_eq!(hits.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(store.query_count(), 1);
    }

    #[tokio::test]
    async fn tag_match_is_substring_of_encoded_list() {
        let store = MemoryStore::with_entries(vec![
            entry(1, 1900, 1, 1).with_words(TagList::parse("['fishing', 'harbour']")),
            entry(2, 1900, 1, 2).with_words(TagList::parse("['war']")),
        ]);
        let hits = store.entries_by_tag("fish").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[tokio::test]
    async fn tag_match_uses_at_rest_text_not_canonical_form() {
        let store = MemoryStore::new();
        store.insert_with_raw_words(entry(1, 1900, 1, 1), r#"["fishing", harbour]"#);
        store.insert(entry(2, 1900, 1, 2).with_words(TagList::parse("['fishing']")));

        let quoted = store.entries_by_tag(r#""fishing""#).await.unwrap();
        assert_eq!(quoted.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(quoted[0].words.as_slice(), ["fishing", "harbour"]);

        let canonical = store.entries_by_tag("'fishing'").await.unwrap();
        assert_eq!(canonical.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2]);
    }

    #[tokio::test]
    async fn fail_after_lets_budget_through_then_errors() {
        let store = MemoryStore::new();
        store.fail_after(2);
        assert!(store.yearly_counts().await.is_ok());
        assert!(store.yearly_counts().await.is_ok());
        assert!(store.yearly_counts().await.is_err());
        assert_eq!(store.query_count(), 3);
    }

    #[tokio::test]
    async fn monthly_counts_respect_range() {
        let store = MemoryStore::with_entries(vec![
            entry(1, 1899, 3, 1),
            entry(2, 1900, 3, 2),
            entry(3, 1900, 5, 2),
            entry(4, 1911, 5, 2),
        ]);
        let counts = store.monthly_counts(YearRange::new(Some(1900), Some(1910))).await.unwrap();
        assert_eq!(
            counts,
            vec![MonthCount { month: 3, article_count: 1 }, MonthCount { month: 5, article_count: 1 }]
        );
    }
}
