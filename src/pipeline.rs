//! End-to-end report generation.
//!
//! Chains the pipeline stages in order: load the schedule table, filter its
//! rows for the requested term, aggregate occupancy per room and weekday,
//! and write the CSV report.

use std::path::Path;

use tracing::info;

use crate::error::ReportResult;
use crate::filter::{FilterCounts, filter_rows};
use crate::input::ScheduleTable;
use crate::occupancy::build_occupancy;
use crate::report::write_report_file;

/// Generates the occupancy report for one term.
///
/// Reads the schedule export at `input`, keeps only rows for `term` that
/// pass the data-quality policy, and writes the per-room, per-weekday
/// occupancy table to `output`. Returns the filter tallies so the caller
/// can report them.
///
/// # Errors
///
/// Fails on unreadable or non-UTF-8 input, a missing required column, a
/// non-numeric START or END field, or an unwritable output path. Per-row
/// data problems are counted and skipped, never fatal.
pub fn generate_report<P, Q>(term: &str, input: P, output: Q) -> ReportResult<FilterCounts>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let table = ScheduleTable::load(&input)?;
    info!(
        fields = ?table.header(),
        bom_stripped = table.bom_stripped(),
        "schedule loaded"
    );

    let outcome = filter_rows(&table, term)?;
    let occupancy = build_occupancy(&outcome.accepted);
    info!(rooms = occupancy.room_count(), "occupancy aggregated");

    write_report_file(&occupancy, &output)?;
    info!(output = %output.as_ref().display(), "report written");

    Ok(outcome.counts)
}
