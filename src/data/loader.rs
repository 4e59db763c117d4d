//! CSV Data Loader Module
//! Loads the licensed-driver CSV using Polars and checks it against the
//! expected schema before anything downstream sees it.

use crate::data::record::{DriverRecord, Gender};
use log::{debug, info};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const YEAR_COL: &str = "Year";
pub const STATE_COL: &str = "State";
pub const GENDER_COL: &str = "Gender";
pub const DRIVERS_COL: &str = "Drivers";

/// Rows used for schema inference before Polars settles on column types.
const INFER_SCHEMA_ROWS: usize = 10_000;

#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("Column {column} has {count} missing or malformed value(s)")]
    InvalidValues { column: &'static str, count: usize },
    #[error("Unknown gender category: {0:?}")]
    UnknownGender(String),
}

/// Required columns and the types they are coerced to.
fn required_columns() -> [(&'static str, DataType); 4] {
    [
        (YEAR_COL, DataType::Int32),
        (STATE_COL, DataType::String),
        (GENDER_COL, DataType::String),
        (DRIVERS_COL, DataType::Int64),
    ]
}

/// Cells of a float column that would lose a fractional part when cast to
/// an integer type.
fn fractional_count(column: &Column) -> Result<usize, DataLoadError> {
    let values = column.cast(&DataType::Float64)?;
    let count = values
        .f64()?
        .into_iter()
        .flatten()
        .filter(|v| v.fract() != 0.0)
        .count();
    Ok(count)
}

/// A validated, typed table of driver records.
///
/// Holds exactly the four required columns: `Year` (Int32), `State`
/// (String), `Gender` (String, always `Male` or `Female`) and `Drivers`
/// (Int64), none of them containing nulls.
#[derive(Debug, Clone)]
pub struct DriverTable {
    df: DataFrame,
}

impl DriverTable {
    /// Validate a raw DataFrame and coerce it to the driver schema.
    ///
    /// Extra columns are dropped. Cells that are empty or fail to cast are
    /// reported per column rather than silently skipped.
    pub fn from_dataframe(raw: &DataFrame) -> Result<Self, DataLoadError> {
        let mut columns = Vec::with_capacity(4);

        for (name, dtype) in required_columns() {
            let column = raw
                .column(name)
                .map_err(|_| DataLoadError::MissingColumn(name))?;
            if dtype.is_integer() && column.dtype().is_float() {
                let count = fractional_count(column)?;
                if count > 0 {
                    return Err(DataLoadError::InvalidValues {
                        column: name,
                        count,
                    });
                }
            }
            let typed = column.cast(&dtype)?;

            let count = typed.null_count();
            if count > 0 {
                return Err(DataLoadError::InvalidValues {
                    column: name,
                    count,
                });
            }
            columns.push(typed);
        }

        let df = DataFrame::new(columns)?;

        let genders = df.column(GENDER_COL)?.str()?;
        for label in genders.into_iter().flatten() {
            label
                .parse::<Gender>()
                .map_err(DataLoadError::UnknownGender)?;
        }

        Ok(Self { df })
    }

    /// Build a table directly from records (no file involved).
    pub fn from_records(records: &[DriverRecord]) -> Result<Self, DataLoadError> {
        let years: Vec<i32> = records.iter().map(|r| r.year).collect();
        let states: Vec<String> = records.iter().map(|r| r.state.clone()).collect();
        let genders: Vec<String> = records
            .iter()
            .map(|r| r.gender.as_str().to_string())
            .collect();
        let drivers: Vec<i64> = records.iter().map(|r| r.drivers).collect();

        let df = DataFrame::new(vec![
            Column::new(YEAR_COL.into(), years),
            Column::new(STATE_COL.into(), states),
            Column::new(GENDER_COL.into(), genders),
            Column::new(DRIVERS_COL.into(), drivers),
        ])?;

        Ok(Self { df })
    }

    /// Materialize the table back into records, in file order.
    ///
    /// Construction rejects nulls, so every row yields a record.
    pub fn records(&self) -> Result<Vec<DriverRecord>, DataLoadError> {
        let years = self.df.column(YEAR_COL)?.i32()?;
        let states = self.df.column(STATE_COL)?.str()?;
        let genders = self.df.column(GENDER_COL)?.str()?;
        let drivers = self.df.column(DRIVERS_COL)?.i64()?;

        years
            .into_iter()
            .zip(states.into_iter())
            .zip(genders.into_iter())
            .zip(drivers.into_iter())
            .filter_map(|(((year, state), gender), drivers)| {
                Some((year?, state?, gender?, drivers?))
            })
            .map(|(year, state, gender, drivers)| {
                let gender = gender
                    .parse::<Gender>()
                    .map_err(DataLoadError::UnknownGender)?;
                Ok(DriverRecord::new(year, state, gender, drivers))
            })
            .collect()
    }

    /// Get a reference to the underlying DataFrame.
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load and validate the driver CSV at `path`.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<DriverTable, DataLoadError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(DataLoadError::NotFound(path.to_path_buf()));
        }

        let raw = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .finish()?
            .collect()?;
        debug!(
            "Read {} rows x {} columns from {}",
            raw.height(),
            raw.width(),
            path.display()
        );

        let table = DriverTable::from_dataframe(&raw)?;
        info!("Loaded {} driver records from {}", table.len(), path.display());

        Ok(table)
    }
}
