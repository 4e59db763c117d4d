//! Run configuration.

use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "Licensed_drivers_By_State.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "driver_analysis_map.html";
/// Most recent year in the published dataset.
pub const DEFAULT_YEAR: i32 = 2017;

/// Where to read from, which year to analyze, and where to put the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub input_path: PathBuf,
    pub year: i32,
    pub output_path: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            year: DEFAULT_YEAR,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
