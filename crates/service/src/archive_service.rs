use std::sync::Arc;

use chrono::NaiveDate;
use historical_news_core::{Entry, MapPoint, MonthCount, YearCount, YearRange};
use historical_news_storage::ArchiveStore;

use crate::clock::{Clock, SystemClock};
use crate::error::ServiceError;
use crate::params::{parse_id, parse_month, require};
use crate::resolver::{resolve_nearest_day, FallbackConfig, Resolution};

/// Read operations behind every archive endpoint.
///
/// Required parameters are validated before the store is touched, so a
/// missing parameter never costs a round-trip.
pub struct ArchiveService {
    store: Arc<dyn ArchiveStore>,
    clock: Arc<dyn Clock>,
    fallback: FallbackConfig,
}

impl ArchiveService {
    #[must_use]
    pub fn new(store: Arc<dyn ArchiveStore>, fallback: FallbackConfig) -> Self {
        Self { store, clock: Arc::new(SystemClock), fallback }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn fallback(&self) -> FallbackConfig {
        self.fallback
    }

    /// Entries for today's day-of-year or the nearest earlier one.
    pub async fn entries_for_today(&self) -> Result<Resolution, ServiceError> {
        self.entries_for_date(self.clock.today()).await
    }

    pub async fn entries_for_date(&self, reference: NaiveDate) -> Result<Resolution, ServiceError> {
        let resolution = resolve_nearest_day(self.store.as_ref(), reference, self.fallback).await?;
        match resolution.fallback_days() {
            Some(days) if days > 0 => tracing::info!(
                %reference,
                fallback_days = days,
                entries = resolution.entries.len(),
                "served nearest earlier day-of-year"
            ),
            Some(_) => {},
            None => tracing::info!(%reference, attempts = resolution.attempts, "no entries in fallback window"),
        }
        Ok(resolution)
    }

    pub async fn entry_by_id(&self, id: Option<&str>) -> Result<Option<Entry>, ServiceError> {
        let id = parse_id(id)?;
        Ok(self.store.get_entry(id).await?)
    }

    pub async fn articles_by_tag(&self, tag: Option<&str>) -> Result<Vec<Entry>, ServiceError> {
        let tag = require("tag", tag)?;
        Ok(self.store.entries_by_tag(tag).await?)
    }

    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Entry>, ServiceError> {
        let query = require("q", query)?;
        Ok(self.store.search_content(query).await?)
    }

    pub async fn articles_by_city(&self, city: Option<&str>) -> Result<Vec<Entry>, ServiceError> {
        let city = require("city", city)?;
        Ok(self.store.entries_by_city(city).await?)
    }

    pub async fn articles_for_month(
        &self,
        month: Option<&str>,
        range: YearRange,
    ) -> Result<Vec<Entry>, ServiceError> {
        let month = parse_month(month)?;
        Ok(self.store.entries_for_month(month, range).await?)
    }

    pub async fn monthly_counts(&self, range: YearRange) -> Result<Vec<MonthCount>, ServiceError> {
        Ok(self.store.monthly_counts(range).await?)
    }

    pub async fn yearly_counts(&self) -> Result<Vec<YearCount>, ServiceError> {
        Ok(self.store.yearly_counts().await?)
    }

    pub async fn map_points(&self) -> Result<Vec<MapPoint>, ServiceError> {
        Ok(self.store.map_points().await?)
    }
}
