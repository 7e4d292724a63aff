//! HTTP API server for the historical news archive.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;
pub mod views;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use historical_news_service::ArchiveService;

pub use api_error::{ApiError, INTERNAL_ERROR_BODY};
pub use handlers::entry::ENTRY_NOT_FOUND_BODY;
pub use views::{EntryPageRenderer, LogoImage, ViewError};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Validated reads over the archive
    pub archive: Arc<ArchiveService>,
    /// Renderer for the single-entry HTML page
    pub entry_page: EntryPageRenderer,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(handlers::daily::today))
        .route("/health", get(health))
        .route("/articles-by-tag", get(handlers::articles::by_tag))
        .route("/search", get(handlers::articles::search))
        .route("/entry", get(handlers::entry::entry_page))
        .route("/monthly", get(handlers::stats::monthly))
        .route("/articles", get(handlers::articles::for_month))
        .route("/yearly", get(handlers::stats::yearly))
        .route("/map-data", get(handlers::stats::map_data))
        .route("/articles-by-city", get(handlers::articles::by_city))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
