use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use historical_news_core::{Entry, NO_MATCHES_MESSAGE};

use crate::api_error::ApiError;
use crate::query_types::{CityQuery, MonthArticlesQuery, SearchQuery, TagQuery};
use crate::response_types::EntriesOrMessage;
use crate::AppState;

pub async fn by_tag(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TagQuery>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let entries = state.archive.articles_by_tag(query.tag.as_deref()).await?;
    Ok(Json(entries))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<EntriesOrMessage>, ApiError> {
    let entries = state.archive.search(query.q.as_deref()).await?;
    Ok(Json(EntriesOrMessage::from_entries(entries, NO_MATCHES_MESSAGE)))
}

pub async fn by_city(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CityQuery>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let entries = state.archive.articles_by_city(query.city.as_deref()).await?;
    Ok(Json(entries))
}

pub async fn for_month(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MonthArticlesQuery>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let range = query.range()?;
    let entries = state.archive.articles_for_month(query.month.as_deref(), range).await?;
    Ok(Json(entries))
}
