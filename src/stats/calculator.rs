//! Summary Calculator Module
//! Ranked selections and roll-ups over the per-state aggregates.

use crate::data::StateAggregate;
use statrs::statistics::Statistics;

/// Sums across every state in the aggregate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GrandTotals {
    pub male: i64,
    pub female: i64,
    pub gender_difference: i64,
}

/// Mean of the per-state percentages (each state weighted equally).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AveragePercentages {
    pub male: f64,
    pub female: f64,
}

/// Selections used by the console report.
///
/// All rankings use stable sorts, so ties keep the order of the input slice.
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// The `n` states with the most drivers, largest first.
    pub fn top_by_total(aggregates: &[StateAggregate], n: usize) -> Vec<&StateAggregate> {
        let mut ranked: Vec<&StateAggregate> = aggregates.iter().collect();
        ranked.sort_by(|a, b| b.total.cmp(&a.total));
        ranked.truncate(n);
        ranked
    }

    pub fn grand_totals(aggregates: &[StateAggregate]) -> GrandTotals {
        aggregates
            .iter()
            .fold(GrandTotals::default(), |acc, agg| GrandTotals {
                male: acc.male + agg.male,
                female: acc.female + agg.female,
                gender_difference: acc.gender_difference + agg.gender_difference,
            })
    }

    /// States with more male than female drivers, largest gap first.
    pub fn male_dominant(aggregates: &[StateAggregate], n: usize) -> Vec<&StateAggregate> {
        let mut ranked: Vec<&StateAggregate> = aggregates
            .iter()
            .filter(|agg| agg.gender_difference > 0)
            .collect();
        ranked.sort_by(|a, b| b.gender_difference.cmp(&a.gender_difference));
        ranked.truncate(n);
        ranked
    }

    /// States with more female than male drivers, most negative gap first.
    pub fn female_dominant(aggregates: &[StateAggregate], n: usize) -> Vec<&StateAggregate> {
        let mut ranked: Vec<&StateAggregate> = aggregates
            .iter()
            .filter(|agg| agg.gender_difference < 0)
            .collect();
        ranked.sort_by(|a, b| a.gender_difference.cmp(&b.gender_difference));
        ranked.truncate(n);
        ranked
    }

    /// Zero-total states have no meaningful split and are left out.
    /// Returns `None` when no state has any drivers.
    pub fn average_percentages(aggregates: &[StateAggregate]) -> Option<AveragePercentages> {
        let (male, female): (Vec<f64>, Vec<f64>) = aggregates
            .iter()
            .filter(|agg| agg.total > 0)
            .map(|agg| (agg.male_pct, agg.female_pct))
            .unzip();
        if male.is_empty() {
            return None;
        }

        Some(AveragePercentages {
            male: male.iter().mean(),
            female: female.iter().mean(),
        })
    }

    /// The `n` states closest to an even split, ignoring zero-total states.
    pub fn most_balanced(aggregates: &[StateAggregate], n: usize) -> Vec<&StateAggregate> {
        let mut ranked: Vec<&StateAggregate> =
            aggregates.iter().filter(|agg| agg.total > 0).collect();
        ranked.sort_by(|a, b| a.gender_balance.total_cmp(&b.gender_balance));
        ranked.truncate(n);
        ranked
    }
}
