pub mod csv_file;

pub use csv_file::load_csv_dataset;

/// Errors raised while constructing the record set at startup.
///
/// Any of these is fatal: the service must not start serving queries over
/// a missing or partially parsed dataset.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("dataset not found at '{0}'")]
    Missing(String),
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {message}")]
    Row { row: usize, message: String },
}
