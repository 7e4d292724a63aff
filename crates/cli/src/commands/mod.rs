pub(crate) mod init_db;
pub(crate) mod query;
pub(crate) mod serve;

use std::sync::Arc;

use anyhow::{Context, Result};
use historical_news_service::ArchiveService;
use historical_news_storage::PgStorage;

use crate::config::AppConfig;

pub(crate) async fn connect(config: &AppConfig) -> Result<PgStorage> {
    PgStorage::new(&config.database_url).await.context("failed to connect to PostgreSQL")
}

pub(crate) async fn archive_service(config: &AppConfig) -> Result<ArchiveService> {
    let storage = connect(config).await?;
    Ok(ArchiveService::new(Arc::new(storage), config.fallback))
}
