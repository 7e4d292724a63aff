use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use historical_news_core::{MapPoint, MonthCount, YearCount};

use crate::api_error::ApiError;
use crate::query_types::YearRangeQuery;
use crate::AppState;

pub async fn monthly(
    State(state): State<Arc<AppState>>,
    Query(query): Query<YearRangeQuery>,
) -> Result<Json<Vec<MonthCount>>, ApiError> {
    let range = query.range()?;
    Ok(Json(state.archive.monthly_counts(range).await?))
}

pub async fn yearly(State(state): State<Arc<AppState>>) -> Result<Json<Vec<YearCount>>, ApiError> {
    Ok(Json(state.archive.yearly_counts().await?))
}

pub async fn map_data(State(state): State<Arc<AppState>>) -> Result<Json<Vec<MapPoint>>, ApiError> {
    Ok(Json(state.archive.map_points().await?))
}
