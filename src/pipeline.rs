//! End-to-end run: load, aggregate, report, render, save.

use crate::config::AnalysisConfig;
use crate::data::{AggregateError, Aggregator, DataLoadError, DataLoader, StateAggregate};
use crate::map::{MapRenderer, RenderError};
use crate::report::Reporter;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Failed to write report: {0}")]
    Report(#[source] io::Error),
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub aggregates: Vec<StateAggregate>,
    pub map_path: PathBuf,
    pub markers: usize,
    pub skipped: Vec<String>,
}

/// Run the full analysis, writing the report to `out`.
///
/// The report is formatted in memory and the map is saved before anything
/// reaches `out`, so an error leaves neither report text nor a map file.
pub fn run<W: Write>(
    config: &AnalysisConfig,
    out: &mut W,
) -> Result<AnalysisOutcome, AnalysisError> {
    let table = DataLoader::load_csv(&config.input_path)?;
    let aggregates = Aggregator::aggregate(&table, config.year)?;

    let mut report = Vec::new();
    Reporter::write_report(&mut report, &aggregates, config.year)
        .map_err(AnalysisError::Report)?;

    let map = MapRenderer::render(&aggregates)?;
    map.save(&config.output_path)?;
    if !map.skipped().is_empty() {
        info!("States without map coordinates: {}", map.skipped().join(", "));
    }

    out.write_all(&report).map_err(AnalysisError::Report)?;
    writeln!(out)
        .and_then(|()| writeln!(out, "=== MAP SAVED ==="))
        .and_then(|()| {
            writeln!(
                out,
                "Interactive map saved as '{}'",
                config.output_path.display()
            )
        })
        .map_err(AnalysisError::Report)?;

    Ok(AnalysisOutcome {
        markers: map.markers().len(),
        skipped: map.skipped().to_vec(),
        map_path: config.output_path.clone(),
        aggregates,
    })
}
