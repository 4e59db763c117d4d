//! Data module - CSV loading and per-state aggregation

mod aggregator;
mod loader;
mod record;

pub use aggregator::{AggregateError, Aggregator, StateAggregate};
pub use loader::{DataLoadError, DataLoader, DriverTable};
pub use record::{DriverRecord, Gender};
