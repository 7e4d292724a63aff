use anyhow::Result;
use chrono::NaiveDate;
use historical_news_core::{YearRange, NO_ENTRIES_MESSAGE, NO_MATCHES_MESSAGE};
use serde_json::json;

use crate::commands::archive_service;
use crate::config::AppConfig;

pub(crate) async fn run_today(config: &AppConfig, date: Option<NaiveDate>) -> Result<()> {
    let service = archive_service(config).await?;
    let resolution = match date {
        Some(date) => service.entries_for_date(date).await?,
        None => service.entries_for_today().await?,
    };
    if resolution.is_empty() {
        println!("{}", json!({ "message": NO_ENTRIES_MESSAGE }));
    } else {
        println!("{}", serde_json::to_string_pretty(&resolution.entries)?);
    }
    Ok(())
}

pub(crate) async fn run_search(config: &AppConfig, query: &str) -> Result<()> {
    let service = archive_service(config).await?;
    let hits = service.search(Some(query)).await?;
    if hits.is_empty() {
        println!("{}", json!({ "message": NO_MATCHES_MESSAGE }));
    } else {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    }
    Ok(())
}

pub(crate) async fn run_yearly(config: &AppConfig) -> Result<()> {
    let counts = archive_service(config).await?.yearly_counts().await?;
    println!("{}", serde_json::to_string_pretty(&counts)?);
    Ok(())
}

pub(crate) async fn run_monthly(config: &AppConfig, range: YearRange) -> Result<()> {
    let counts = archive_service(config).await?.monthly_counts(range).await?;
    println!("{}", serde_json::to_string_pretty(&counts)?);
    Ok(())
}
