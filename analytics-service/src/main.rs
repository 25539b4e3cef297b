use std::path::Path;
use std::sync::Arc;

use analytics_service::{config::AppConfig, http, loader, metrics_server, observability};
use anyhow::{Context, Result};
use heatpump_core::RecordStore;

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    // Load configuration
    let cfg = AppConfig::load()?;

    // The dataset must be fully loaded before the listener comes up; a
    // missing or malformed dataset keeps the service from starting.
    let records = loader::load_csv_dataset(Path::new(&cfg.dataset.path))
        .with_context(|| format!("failed to load dataset from '{}'", cfg.dataset.path))?;
    let store = Arc::new(RecordStore::new(records));
    tracing::info!(records = store.len(), "dataset loaded");

    // Start metrics server if configured
    if let Some(metrics_cfg) = &cfg.metrics {
        metrics_server::init(&metrics_cfg.bind_addr)?;
    }

    let app = http::router(store);
    let listener = tokio::net::TcpListener::bind(&cfg.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind '{}'", cfg.server.bind_addr))?;
    tracing::info!(addr = %cfg.server.bind_addr, "heat pump contribution API listening");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
