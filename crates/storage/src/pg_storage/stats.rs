//! StatsStore implementation for PgStorage.

use async_trait::async_trait;
use historical_news_core::{MapPoint, MonthCount, YearCount, YearRange, ENTRY_TABLE};
use sqlx::Row;

use super::filters::monthly_counts_query;
use super::PgStorage;
use crate::error::StorageError;
use crate::traits::StatsStore;

#[async_trait]
impl StatsStore for PgStorage {
    async fn monthly_counts(&self, range: YearRange) -> Result<Vec<MonthCount>, StorageError> {
        let mut qb = monthly_counts_query(range);
        let rows = qb.build().fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| -> Result<MonthCount, StorageError> {
                Ok(MonthCount {
                    month: row.try_get("month")?,
                    article_count: row.try_get("article_count")?,
                })
            })
            .collect()
    }

    async fn yearly_counts(&self) -> Result<Vec<YearCount>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT year::INTEGER AS year, COUNT(*) AS article_count FROM {ENTRY_TABLE}
             GROUP BY year ORDER BY year ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter()
            .map(|row| -> Result<YearCount, StorageError> {
                Ok(YearCount {
                    year: row.try_get("year")?,
                    article_count: row.try_get("article_count")?,
                })
            })
            .collect()
    }

    async fn map_points(&self) -> Result<Vec<MapPoint>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT place_corrected, latitude::DOUBLE PRECISION AS latitude,
                    longitude::DOUBLE PRECISION AS longitude
               FROM {ENTRY_TABLE} ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter()
            .map(|row| -> Result<MapPoint, StorageError> {
                Ok(MapPoint {
                    place_corrected: row.try_get("place_corrected")?,
                    latitude: row.try_get("latitude")?,
                    longitude: row.try_get("longitude")?,
                })
            })
            .collect()
    }
}
