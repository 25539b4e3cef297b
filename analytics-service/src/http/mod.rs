pub mod error;
pub mod handlers;
pub mod report;

use std::sync::Arc;

use axum::{routing::get, Router};
use heatpump_core::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
}

pub fn router(store: Arc<RecordStore>) -> Router {
    Router::new()
        .route("/", get(handlers::manual))
        .route("/health", get(handlers::health))
        .route("/locations", get(handlers::list_locations))
        .route("/heatpump/share", get(handlers::heatpump_share))
        .route("/heatpump/summary", get(handlers::heatpump_summary))
        .route("/heatpump/series", get(handlers::heatpump_series))
        .route("/heatpump/report", get(handlers::heatpump_report))
        .with_state(AppState { store })
}
