//! Occupancy report writing.
//!
//! Renders one CSV row per (room, weekday) pair: the room id, the full day
//! name, then sixteen slot values as literal "0"/"1" strings. Rows are
//! terminated CR-LF, matching the Excel-style convention of the schedule
//! exports this report sits beside. Hour columns are labeled 7 am through
//! 10 pm, with noon written as 12 pm.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{ReportError, ReportResult};
use crate::occupancy::{OccupancyTable, SLOT_COUNT};

/// Column labels for the sixteen hour slots, slot 0 first.
pub const HOUR_LABELS: [&str; SLOT_COUNT] = [
    "7 am", "8 am", "9 am", "10 am", "11 am", "12 pm", "1 pm", "2 pm", "3 pm", "4 pm", "5 pm",
    "6 pm", "7 pm", "8 pm", "9 pm", "10 pm",
];

/// Writes the occupancy report to any sink.
///
/// Emits the fixed header row, then six weekday rows per room with rooms in
/// lexicographic order, so the output holds exactly `6 * rooms + 1` rows.
pub fn write_report<W: Write>(table: &OccupancyTable, sink: W) -> io::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(sink);

    let mut header = vec!["Room", "Day"];
    header.extend(HOUR_LABELS);
    writer.write_record(&header).map_err(io::Error::other)?;

    for (room, week) in table.rooms() {
        for (day, slots) in week.iter() {
            let mut record = vec![room, day.name()];
            record.extend(
                slots
                    .flags()
                    .iter()
                    .map(|&occupied| if occupied { "1" } else { "0" }),
            );
            writer.write_record(&record).map_err(io::Error::other)?;
        }
    }

    writer.flush()
}

/// Writes the occupancy report to a file, creating or truncating it.
///
/// # Errors
///
/// Returns [`ReportError::OutputWrite`] when the file cannot be created or
/// written.
pub fn write_report_file<P: AsRef<Path>>(table: &OccupancyTable, path: P) -> ReportResult<()> {
    let path = path.as_ref();
    let output_error = |e: io::Error| ReportError::OutputWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let file = File::create(path).map_err(output_error)?;
    write_report(table, file).map_err(output_error)
}
