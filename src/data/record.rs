//! Driver Record Module
//! Typed rows of the licensed-driver dataset.

use std::fmt;
use std::str::FromStr;

/// Gender category as it appears in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Label used in the CSV `Gender` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(other.to_string()),
        }
    }
}

/// One row of the dataset: licensed drivers for a state, year and gender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRecord {
    pub year: i32,
    pub state: String,
    pub gender: Gender,
    pub drivers: i64,
}

impl DriverRecord {
    pub fn new(year: i32, state: impl Into<String>, gender: Gender, drivers: i64) -> Self {
        Self {
            year,
            state: state.into(),
            gender,
            drivers,
        }
    }
}
