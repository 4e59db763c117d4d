//! Console Report Module
//! Formats the ranked views of the state aggregates as text tables.

use crate::data::StateAggregate;
use crate::format::{percent, thousands};
use crate::stats::SummaryCalculator;
use comfy_table::{presets::ASCII_MARKDOWN, Cell, CellAlignment, ContentArrangement, Table};
use std::io::{self, Write};

pub const TOP_STATES: usize = 10;
pub const TOP_DIFFERENCES: usize = 5;
pub const MOST_BALANCED: usize = 5;

const EMPTY_SELECTION: &str = "(none)";

/// Writes the driver summary report.
///
/// Output depends only on the aggregates and the year, never on terminal
/// width, so identical input always yields identical text.
pub struct Reporter;

impl Reporter {
    pub fn write_report<W: Write>(
        out: &mut W,
        aggregates: &[StateAggregate],
        year: i32,
    ) -> io::Result<()> {
        writeln!(out, "=== TOP {} STATES WITH MOST DRIVERS ({}) ===", TOP_STATES, year)?;
        let top = SummaryCalculator::top_by_total(aggregates, TOP_STATES);
        Self::write_table(
            out,
            &["State", "Total Drivers", "Male", "Female", "Gender Difference"],
            top.iter().map(|agg| {
                vec![
                    text(&agg.state),
                    number(thousands(agg.total)),
                    number(thousands(agg.male)),
                    number(thousands(agg.female)),
                    number(thousands(agg.gender_difference)),
                ]
            }),
        )?;

        writeln!(out)?;
        writeln!(out, "=== GENDER ANALYSIS SUMMARY ===")?;
        let totals = SummaryCalculator::grand_totals(aggregates);
        writeln!(out, "Total Male Drivers: {}", thousands(totals.male))?;
        writeln!(out, "Total Female Drivers: {}", thousands(totals.female))?;
        writeln!(
            out,
            "Overall Gender Difference (Male - Female): {}",
            thousands(totals.gender_difference)
        )?;

        writeln!(out)?;
        writeln!(out, "=== STATES WITH LARGEST GENDER DIFFERENCES ===")?;
        writeln!(out, "States where males significantly outnumber females:")?;
        Self::write_difference_table(
            out,
            &SummaryCalculator::male_dominant(aggregates, TOP_DIFFERENCES),
        )?;
        writeln!(out)?;
        writeln!(out, "States where females significantly outnumber males:")?;
        Self::write_difference_table(
            out,
            &SummaryCalculator::female_dominant(aggregates, TOP_DIFFERENCES),
        )?;

        writeln!(out)?;
        writeln!(out, "=== GENDER DISTRIBUTION INSIGHTS ===")?;
        match SummaryCalculator::average_percentages(aggregates) {
            Some(avg) => {
                writeln!(
                    out,
                    "Average Male Percentage across all states: {}",
                    percent(avg.male)
                )?;
                writeln!(
                    out,
                    "Average Female Percentage across all states: {}",
                    percent(avg.female)
                )?;
            }
            None => {
                writeln!(out, "Average Male Percentage across all states: n/a")?;
                writeln!(out, "Average Female Percentage across all states: n/a")?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Most gender-balanced states:")?;
        let balanced = SummaryCalculator::most_balanced(aggregates, MOST_BALANCED);
        Self::write_table(
            out,
            &["State", "Male %", "Female %"],
            balanced.iter().map(|agg| {
                vec![
                    text(&agg.state),
                    number(percent(agg.male_pct)),
                    number(percent(agg.female_pct)),
                ]
            }),
        )
    }

    fn write_difference_table<W: Write>(
        out: &mut W,
        selection: &[&StateAggregate],
    ) -> io::Result<()> {
        Self::write_table(
            out,
            &["State", "Gender Difference", "Male %", "Female %"],
            selection.iter().map(|agg| {
                vec![
                    text(&agg.state),
                    number(thousands(agg.gender_difference)),
                    number(percent(agg.male_pct)),
                    number(percent(agg.female_pct)),
                ]
            }),
        )
    }

    fn write_table<W, I>(out: &mut W, header: &[&str], rows: I) -> io::Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Vec<Cell>>,
    {
        let mut table = Table::new();
        table.load_preset(ASCII_MARKDOWN);
        table.set_content_arrangement(ContentArrangement::Disabled);
        table.set_header(header.to_vec());

        let mut row_count = 0;
        for row in rows {
            table.add_row(row);
            row_count += 1;
        }

        if row_count == 0 {
            writeln!(out, "{}", EMPTY_SELECTION)
        } else {
            writeln!(out, "{}", table)
        }
    }
}

fn text(value: &str) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Left)
}

fn number(value: String) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}
