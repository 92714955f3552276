//! Schedule input handling for the room occupancy report.
//!
//! This module reads the raw schedule export: decoding, byte-order-mark
//! stripping, CSV parsing, and header column resolution.

mod reader;

pub use reader::ScheduleTable;
