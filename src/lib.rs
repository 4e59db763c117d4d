//! Driver Atlas - licensed driver analysis by state
//!
//! Loads the licensed-drivers CSV, rolls one year up per state, prints
//! ranked summary tables and saves an interactive marker map as HTML.

pub mod config;
pub mod data;
pub mod format;
pub mod map;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use config::AnalysisConfig;
pub use pipeline::{run, AnalysisError, AnalysisOutcome};
