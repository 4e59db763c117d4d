//! Driver Atlas - licensed driver analysis by state
//!
//! Prints the per-state summary for the default year and writes the
//! interactive map into the working directory.

use anyhow::Context;
use driver_atlas::AnalysisConfig;
use std::io;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let config = AnalysisConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    driver_atlas::run(&config, &mut out)
        .with_context(|| format!("driver analysis of {} failed", config.input_path.display()))?;

    Ok(())
}
