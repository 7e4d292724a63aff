use async_trait::async_trait;
use historical_news_core::{MapPoint, MonthCount, YearCount, YearRange};

use crate::error::StorageError;

/// Aggregate and projection reads.
#[async_trait]
pub trait StatsStore: Send + Sync {
    /// Article counts grouped by month within the year bounds, month ascending.
    async fn monthly_counts(&self, range: YearRange) -> Result<Vec<MonthCount>, StorageError>;

    /// Article counts grouped by year, year ascending.
    async fn yearly_counts(&self) -> Result<Vec<YearCount>, StorageError>;

    /// Place and coordinates of every entry.
    async fn map_points(&self) -> Result<Vec<MapPoint>, StorageError>;
}
