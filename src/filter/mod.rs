//! Row filtering for the room occupancy report.
//!
//! This module applies the term and data-quality policy to raw schedule
//! rows, producing the accepted class meetings plus a tally of every
//! rejection reason.

mod row_filter;

pub use row_filter::{FilterCounts, FilterOutcome, filter_rows};
