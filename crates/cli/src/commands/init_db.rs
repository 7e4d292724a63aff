use anyhow::{Context, Result};

use crate::commands::connect;
use crate::config::AppConfig;

pub(crate) async fn run(config: &AppConfig) -> Result<()> {
    let storage = connect(config).await?;
    storage.ensure_schema().await.context("schema bootstrap failed")?;
    println!("Schema ready");
    Ok(())
}
