use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};

use crate::api_error::ApiError;
use crate::query_types::EntryQuery;
use crate::AppState;

pub const ENTRY_NOT_FOUND_BODY: &str = "Entry not found.";

/// Standalone HTML page for one entry.
pub async fn entry_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EntryQuery>,
) -> Result<Response, ApiError> {
    match state.archive.entry_by_id(query.id.as_deref()).await? {
        Some(entry) => Ok(Html(state.entry_page.render(&entry)?).into_response()),
        None => Ok(ENTRY_NOT_FOUND_BODY.into_response()),
    }
}
