//! Nearest prior day-of-year with archive coverage.

use chrono::{Datelike, NaiveDate};
use historical_news_core::{
    env_parse_with_default, DayMonth, Entry, DEFAULT_FALLBACK_DAYS, FULL_YEAR_FALLBACK_DAYS,
};
use historical_news_storage::{EntryStore, StorageError};

/// Bound on the backward scan.
///
/// The default of 365 covers every day of a common reference year. In a leap
/// reference year it leaves one key unvisited, the day after the reference
/// date; [`FallbackConfig::full_year`] visits that one too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackConfig {
    pub max_days: u32,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self { max_days: DEFAULT_FALLBACK_DAYS }
    }
}

impl FallbackConfig {
    #[must_use]
    pub const fn full_year() -> Self {
        Self { max_days: FULL_YEAR_FALLBACK_DAYS }
    }

    /// Read `FALLBACK_MAX_DAYS`, capped at one full ring.
    #[must_use]
    pub fn from_env() -> Self {
        let requested = env_parse_with_default("FALLBACK_MAX_DAYS", DEFAULT_FALLBACK_DAYS);
        if requested > FULL_YEAR_FALLBACK_DAYS {
            tracing::warn!(
                requested,
                cap = FULL_YEAR_FALLBACK_DAYS,
                "FALLBACK_MAX_DAYS exceeds one full year, capping"
            );
        }
        Self { max_days: requested.min(FULL_YEAR_FALLBACK_DAYS) }
    }
}

/// Outcome of a fallback scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Key that produced the entries; `None` when the scan came up empty.
    pub day_month: Option<DayMonth>,
    /// Entries for that key, earliest year first.
    pub entries: Vec<Entry>,
    /// Store queries issued.
    pub attempts: u32,
}

impl Resolution {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Days stepped back before the match, `None` if nothing matched.
    #[must_use]
    pub fn fallback_days(&self) -> Option<u32> {
        self.day_month.map(|_| self.attempts.saturating_sub(1))
    }
}

/// Find entries for the reference day-of-year, stepping back one day at a
/// time until a key has entries or `config.max_days` keys have been tried.
///
/// Steps follow the reference year's calendar, so `29-02` is only tried when
/// that year is a leap year and a match N days back costs N+1 queries.
/// Queries run strictly one after another. A store error on any step is
/// returned at once and never counted as an empty day.
pub async fn resolve_nearest_day<S: EntryStore + ?Sized>(
    store: &S,
    reference: NaiveDate,
    config: FallbackConfig,
) -> Result<Resolution, StorageError> {
    let year = reference.year();
    let mut key = DayMonth::from(reference);
    for attempt in 1..=config.max_days {
        let entries = store.entries_for_day_month(key).await?;
        if !entries.is_empty() {
            tracing::debug!(%reference, %key, fallback_days = attempt - 1, "day-of-year match");
            return Ok(Resolution { day_month: Some(key), entries, attempts: attempt });
        }
        key = key.pred_in(year);
    }
    tracing::debug!(%reference, max_days = config.max_days, "no day-of-year match");
    Ok(Resolution { day_month: None, entries: Vec::new(), attempts: config.max_days })
}

#[cfg(test)]
mod tests {
    use super::*;
    use historical_news_storage::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: i64, y: i32, m: u32, d: u32) -> Entry {
        Entry::dated(id, date(y, m, d), format!("entry {id}"))
    }

    #[tokio::test]
    async fn same_day_match_uses_one_query() {
        let store = MemoryStore::with_entries(vec![entry(1, 1920, 6, 15)]);
        let res = resolve_nearest_day(&store, date(2024, 6, 15), FallbackConfig::default())
            .await
            .unwrap();
        assert_eq!(res.entries.len(), 1);
        assert_eq!(res.entries[0].id, 1);
        assert_eq!(res.attempts, 1);
        assert_eq!(res.fallback_days(), Some(0));
        assert_eq!(store.query_count(), 1);
    }

    #[tokio::test]
    async fn empty_store_exhausts_bound() {
        let store = MemoryStore::new();
        let res = resolve_nearest_day(&store, date(2024, 6, 15), FallbackConfig::default())
            .await
            .unwrap();
        assert!(res.is_empty());
        assert_eq!(res.day_month, None);
        assert_eq!(res.fallback_days(), None);
        assert_eq!(res.attempts, 365);
        assert_eq!(store.query_count(), 365);
    }

    #[tokio::test]
    async fn n_days_back_takes_n_plus_one_queries() {
        let reference = date(2023, 9, 30);
        for n in [1_u32, 10, 100, 250, 364] {
            let target = reference - chrono::Days::new(u64::from(n));
            let target = DayMonth::from(target);
            let published = date(1904, target.month(), target.day());
            let store = MemoryStore::with_entries(vec![Entry::dated(1, published, "x")]);
            let res = resolve_nearest_day(&store, reference, FallbackConfig::default()).await.unwrap();
            assert_eq!(res.attempts, n + 1, "n = {n}");
            assert_eq!(store.query_count(), usize::try_from(n + 1).unwrap());
            assert_eq!(res.day_month, Some(target));
            assert_eq!(res.fallback_days(), Some(n));
        }
    }

    #[tokio::test]
    async fn match_spans_years_in_ascending_order() {
        let store = MemoryStore::with_entries(vec![
            entry(1, 1950, 3, 10),
            entry(2, 1890, 3, 10),
            entry(3, 1920, 3, 10),
            entry(4, 1800, 3, 9),
        ]);
        let res = resolve_nearest_day(&store, date(2024, 3, 12), FallbackConfig::default())
            .await
            .unwrap();
        assert_eq!(res.day_month, Some("10-03".parse().unwrap()));
        assert_eq!(res.entries.iter().map(|e| e.year).collect::<Vec<_>>(), vec![1890, 1920, 1950]);
        assert_eq!(res.attempts, 3);
    }

    #[tokio::test]
    async fn crosses_new_year() {
        let store = MemoryStore::with_entries(vec![entry(1, 1899, 12, 31)]);
        let res = resolve_nearest_day(&store, date(2024, 1, 1), FallbackConfig::default())
            .await
            .unwrap();
        assert_eq!(res.day_month, Some("31-12".parse().unwrap()));
        assert_eq!(res.attempts, 2);
    }

    #[tokio::test]
    async fn leap_day_is_visited_in_leap_reference_year() {
        let store = MemoryStore::with_entries(vec![entry(1, 1896, 2, 29)]);
        let res = resolve_nearest_day(&store, date(2024, 3, 1), FallbackConfig::default())
            .await
            .unwrap();
        assert_eq!(res.day_month, Some("29-02".parse().unwrap()));
        assert_eq!(res.attempts, 2);
    }

    #[tokio::test]
    async fn common_reference_year_skips_leap_day() {
        let store = MemoryStore::with_entries(vec![entry(1, 1896, 2, 29), entry(2, 1900, 2, 28)]);
        let res = resolve_nearest_day(&store, date(2023, 3, 1), FallbackConfig::default())
            .await
            .unwrap();
        assert_eq!(res.day_month, Some("28-02".parse().unwrap()));
        assert_eq!(res.entries.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(res.attempts, 2);
    }

    #[tokio::test]
    async fn common_reference_year_reaches_the_following_day() {
        let store = MemoryStore::with_entries(vec![entry(1, 1900, 6, 16)]);
        let res = resolve_nearest_day(&store, date(2023, 6, 15), FallbackConfig::default())
            .await
            .unwrap();
        assert_eq!(res.entries.len(), 1);
        assert_eq!(res.attempts, 365);
        assert_eq!(res.fallback_days(), Some(364));
    }

    #[tokio::test]
    async fn common_reference_year_without_match_uses_full_bound() {
        let store = MemoryStore::new();
        let res = resolve_nearest_day(&store, date(2023, 6, 15), FallbackConfig::default())
            .await
            .unwrap();
        assert!(res.is_empty());
        assert_eq!(store.query_count(), 365);
    }

    #[tokio::test]
    async fn leap_reference_year_default_bound_skips_only_the_following_day() {
        let store = MemoryStore::with_entries(vec![entry(1, 1900, 6, 16)]);
        let res = resolve_nearest_day(&store, date(2024, 6, 15), FallbackConfig::default())
            .await
            .unwrap();
        assert!(res.is_empty());

        let store = MemoryStore::with_entries(vec![entry(1, 1900, 6, 16)]);
        let res = resolve_nearest_day(&store, date(2024, 6, 15), FallbackConfig::full_year())
            .await
            .unwrap();
        assert_eq!(res.attempts, 366);
        assert_eq!(res.entries.len(), 1);
    }

    #[tokio::test]
    async fn store_failure_propagates_immediately() {
        let store = MemoryStore::new();
        store.fail_after(5);
        let err = resolve_nearest_day(&store, date(2024, 6, 15), FallbackConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Database(_)));
        assert_eq!(store.query_count(), 6);
    }

    #[tokio::test]
    async fn zero_bound_issues_no_queries() {
        let store = MemoryStore::with_entries(vec![entry(1, 1920, 6, 15)]);
        let res = resolve_nearest_day(&store, date(2024, 6, 15), FallbackConfig { max_days: 0 })
            .await
            .unwrap();
        assert!(res.is_empty());
        assert_eq!(store.query_count(), 0);
    }
}
