use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use historical_news_core::NO_ENTRIES_MESSAGE;

use crate::api_error::ApiError;
use crate::response_types::EntriesOrMessage;
use crate::AppState;

/// Entries for today's day-of-year, or the nearest earlier day that has any.
pub async fn today(State(state): State<Arc<AppState>>) -> Result<Json<EntriesOrMessage>, ApiError> {
    let resolution = state.archive.entries_for_today().await?;
    Ok(Json(EntriesOrMessage::from_entries(resolution.entries, NO_ENTRIES_MESSAGE)))
}
