//! Report output for the room occupancy report.
//!
//! This module renders the aggregated occupancy table as the final CSV
//! report.

mod writer;

pub use writer::{HOUR_LABELS, write_report, write_report_file};
