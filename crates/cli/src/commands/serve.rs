use std::sync::Arc;

use anyhow::{Context, Result};
use historical_news_http::{create_router, AppState, EntryPageRenderer, LogoImage};

use crate::commands::archive_service;
use crate::config::AppConfig;
use crate::supervisor::supervise;

pub(crate) async fn run(config: AppConfig, port: Option<u16>, host: String) -> Result<()> {
    let archive = Arc::new(archive_service(&config).await?);

    let logo = match LogoImage::load(&config.logo_path) {
        Ok(logo) => Some(logo),
        Err(e) => {
            tracing::warn!(path = %config.logo_path.display(), error = %e, "logo not loaded, entry pages render without it");
            None
        },
    };
    let entry_page = EntryPageRenderer::new(logo).context("failed to compile entry page template")?;

    let state = Arc::new(AppState { archive, entry_page });
    let router = create_router(state);
    let addr = format!("{host}:{}", port.unwrap_or(config.port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Starting HTTP server on {}", addr);

    supervise("http-server", async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")
    })
    .await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
