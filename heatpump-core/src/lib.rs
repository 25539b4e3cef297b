pub mod analytics;
pub mod domain;
pub mod store;

pub use domain::{Observation, TimeBuckets};
pub use store::RecordStore;
