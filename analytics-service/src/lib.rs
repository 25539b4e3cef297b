pub mod config;
pub mod http;
pub mod loader;
pub mod metrics_server;
pub mod observability;

pub use http::router;
pub use loader::load_csv_dataset;
