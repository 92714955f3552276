//! Occupancy aggregation for the room occupancy report.
//!
//! This module contains the interval-to-slot mapping and the per-room,
//! per-weekday aggregation of accepted class meetings.

mod slots;
mod table;

pub use slots::{FIRST_SLOT_HOUR, OccupancySlots, SLOT_COUNT};
pub use table::{OccupancyTable, WeekOccupancy, build_occupancy};
