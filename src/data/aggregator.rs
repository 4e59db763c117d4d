//! State Aggregator Module
//! Filters the driver table to a single year and rolls it up per state.

use crate::data::loader::{DriverTable, DRIVERS_COL, GENDER_COL, STATE_COL, YEAR_COL};
use crate::data::record::Gender;
use log::{debug, info};
use polars::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Per-state totals for one year, with the derived gender ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct StateAggregate {
    pub state: String,
    pub total: i64,
    pub male: i64,
    pub female: i64,
    /// Male minus female.
    pub gender_difference: i64,
    pub male_pct: f64,
    pub female_pct: f64,
    /// Distance of `male_pct` from an even 50/50 split.
    pub gender_balance: f64,
}

impl StateAggregate {
    /// Derive the ratio fields from the raw counts.
    ///
    /// A state with a zero total gets `0.0` for both percentages.
    pub fn new(state: impl Into<String>, total: i64, male: i64, female: i64) -> Self {
        let (male_pct, female_pct) = if total == 0 {
            (0.0, 0.0)
        } else {
            (
                male as f64 * 100.0 / total as f64,
                female as f64 * 100.0 / total as f64,
            )
        };

        Self {
            state: state.into(),
            total,
            male,
            female,
            gender_difference: male - female,
            male_pct,
            female_pct,
            gender_balance: (male_pct - 50.0).abs(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct GenderCounts {
    male: i64,
    female: i64,
}

/// Rolls driver records up into per-state aggregates.
pub struct Aggregator;

impl Aggregator {
    /// Aggregate every state observed in `year`, sorted by total descending.
    ///
    /// States with equal totals keep alphabetical order. A year with no rows
    /// yields an empty result.
    pub fn aggregate(
        table: &DriverTable,
        year: i32,
    ) -> Result<Vec<StateAggregate>, AggregateError> {
        let year_lf = table
            .dataframe()
            .clone()
            .lazy()
            .filter(col(YEAR_COL).eq(lit(year)));

        let by_state_gender = year_lf
            .clone()
            .group_by([col(STATE_COL), col(GENDER_COL)])
            .agg([col(DRIVERS_COL).sum()])
            .collect()?;
        let by_state = year_lf
            .group_by([col(STATE_COL)])
            .agg([col(DRIVERS_COL).sum()])
            .collect()?;
        debug!(
            "Year {}: {} state/gender groups, {} states",
            year,
            by_state_gender.height(),
            by_state.height()
        );

        let genders = Self::gender_columns(&by_state_gender)?;

        let states = by_state.column(STATE_COL)?.str()?;
        let totals = by_state.column(DRIVERS_COL)?.i64()?;

        let mut joined: BTreeMap<String, i64> = BTreeMap::new();
        for (state, total) in states.into_iter().zip(totals.into_iter()) {
            if let Some(state) = state {
                joined.insert(state.to_string(), total.unwrap_or(0));
            }
        }

        let mut aggregates: Vec<StateAggregate> = joined
            .into_iter()
            .map(|(state, total)| {
                let counts = genders.get(&state).copied().unwrap_or_default();
                StateAggregate::new(state, total, counts.male, counts.female)
            })
            .collect();

        aggregates.sort_by(|a, b| b.total.cmp(&a.total));
        info!("Aggregated {} states for {}", aggregates.len(), year);

        Ok(aggregates)
    }

    /// Reshape the (state, gender) grouping into one Male/Female pair per
    /// state. Categories absent for a state stay at zero.
    fn gender_columns(
        grouped: &DataFrame,
    ) -> Result<BTreeMap<String, GenderCounts>, AggregateError> {
        let states = grouped.column(STATE_COL)?.str()?;
        let genders = grouped.column(GENDER_COL)?.str()?;
        let drivers = grouped.column(DRIVERS_COL)?.i64()?;

        let mut pivot: BTreeMap<String, GenderCounts> = BTreeMap::new();
        for ((state, gender), count) in states
            .into_iter()
            .zip(genders.into_iter())
            .zip(drivers.into_iter())
        {
            let (Some(state), Some(gender)) = (state, gender) else {
                continue;
            };
            let count = count.unwrap_or(0);
            let entry = pivot.entry(state.to_string()).or_default();
            match gender.parse::<Gender>() {
                Ok(Gender::Male) => entry.male += count,
                Ok(Gender::Female) => entry.female += count,
                Err(label) => debug!(
                    "Ignoring {} drivers with gender {:?} in {}",
                    count, label, state
                ),
            }
        }

        Ok(pivot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::DriverRecord;

    fn table(records: &[DriverRecord]) -> DriverTable {
        DriverTable::from_records(records).unwrap()
    }

    fn sample() -> Vec<DriverRecord> {
        vec![
            DriverRecord::new(2017, "StateA", Gender::Male, 100),
            DriverRecord::new(2017, "StateA", Gender::Female, 50),
            DriverRecord::new(2017, "StateB", Gender::Male, 30),
            DriverRecord::new(2016, "StateA", Gender::Male, 999),
        ]
    }

    #[test]
    fn test_aggregate_worked_example() {
        let result = Aggregator::aggregate(&table(&sample()), 2017).unwrap();
        assert_eq!(result.len(), 2);

        let a = &result[0];
        assert_eq!(a.state, "StateA");
        assert_eq!((a.total, a.male, a.female, a.gender_difference), (150, 100, 50, 50));
        assert!((a.male_pct - 66.666_666).abs() < 1e-3);
        assert!((a.female_pct - 33.333_333).abs() < 1e-3);

        let b = &result[1];
        assert_eq!(b.state, "StateB");
        assert_eq!((b.total, b.male, b.female, b.gender_difference), (30, 30, 0, 30));
        assert_eq!(b.male_pct, 100.0);
        assert_eq!(b.female_pct, 0.0);
        assert_eq!(b.gender_balance, 50.0);
    }

    #[test]
    fn test_aggregate_sums_repeated_rows() {
        let records = vec![
            DriverRecord::new(2017, "Texas", Gender::Male, 10),
            DriverRecord::new(2017, "Texas", Gender::Male, 15),
            DriverRecord::new(2017, "Texas", Gender::Female, 5),
        ];
        let result = Aggregator::aggregate(&table(&records), 2017).unwrap();

        assert_eq!(result, vec![StateAggregate::new("Texas", 30, 25, 5)]);
    }

    #[test]
    fn test_aggregate_totals_match_gender_counts() {
        let mut records = sample();
        records.push(DriverRecord::new(2017, "StateC", Gender::Female, 70));
        records.push(DriverRecord::new(2017, "StateC", Gender::Male, 69));
        let result = Aggregator::aggregate(&table(&records), 2017).unwrap();

        for agg in &result {
            assert_eq!(agg.total, agg.male + agg.female);
            if agg.total > 0 {
                assert!((agg.male_pct + agg.female_pct - 100.0).abs() < 1e-6);
            }
            assert!(agg.gender_balance >= 0.0);
        }

        let male: i64 = result.iter().map(|a| a.male).sum();
        let female: i64 = result.iter().map(|a| a.female).sum();
        let expected_male: i64 = records
            .iter()
            .filter(|r| r.year == 2017 && r.gender == Gender::Male)
            .map(|r| r.drivers)
            .sum();
        let expected_female: i64 = records
            .iter()
            .filter(|r| r.year == 2017 && r.gender == Gender::Female)
            .map(|r| r.drivers)
            .sum();
        assert_eq!(male, expected_male);
        assert_eq!(female, expected_female);
    }

    #[test]
    fn test_aggregate_sorted_by_total_with_alphabetical_ties() {
        let records = vec![
            DriverRecord::new(2017, "Delta", Gender::Male, 5),
            DriverRecord::new(2017, "Bravo", Gender::Male, 10),
            DriverRecord::new(2017, "Alpha", Gender::Female, 5),
            DriverRecord::new(2017, "Charlie", Gender::Female, 20),
        ];
        let result = Aggregator::aggregate(&table(&records), 2017).unwrap();
        let order: Vec<&str> = result.iter().map(|a| a.state.as_str()).collect();

        assert_eq!(order, vec!["Charlie", "Bravo", "Alpha", "Delta"]);
    }

    #[test]
    fn test_aggregate_year_without_rows_is_empty() {
        let result = Aggregator::aggregate(&table(&sample()), 1999).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_gender_columns_ignores_unknown_labels() {
        let grouped = DataFrame::new(vec![
            Column::new(STATE_COL.into(), vec!["Ohio", "Ohio", "Ohio"]),
            Column::new(GENDER_COL.into(), vec!["Male", "Unknown", "Female"]),
            Column::new(DRIVERS_COL.into(), vec![10i64, 99, 7]),
        ])
        .unwrap();

        let pivot = Aggregator::gender_columns(&grouped).unwrap();
        let ohio = pivot["Ohio"];
        assert_eq!((ohio.male, ohio.female), (10, 7));
    }

    #[test]
    fn test_zero_total_state_gets_zero_percentages() {
        let records = vec![
            DriverRecord::new(2017, "Empty", Gender::Male, 0),
            DriverRecord::new(2017, "Empty", Gender::Female, 0),
        ];
        let result = Aggregator::aggregate(&table(&records), 2017).unwrap();

        let empty = &result[0];
        assert_eq!(empty.total, 0);
        assert_eq!(empty.male_pct, 0.0);
        assert_eq!(empty.female_pct, 0.0);
        assert_eq!(empty.gender_balance, 50.0);
        assert!(!empty.male_pct.is_nan());
    }
}
