//! Stats module - Rankings and roll-ups for the report

mod calculator;

pub use calculator::{AveragePercentages, GrandTotals, SummaryCalculator};
