//! Hourly occupancy flags.
//!
//! This module provides [`OccupancySlots`], the fixed-width vector of
//! one-hour slots a room can occupy on a single weekday, and the mapping
//! from hour-hundreds time intervals onto those slots.

use serde::{Deserialize, Serialize};

/// Number of one-hour slots tracked per room per weekday.
pub const SLOT_COUNT: usize = 16;

/// The hour of the first slot: slot 0 covers 7 AM to 8 AM.
pub const FIRST_SLOT_HOUR: i32 = 7;

/// Occupancy flags for one room on one weekday, slot 0 being the 7 AM hour.
///
/// Marking is idempotent set-union: once any interval touches a slot the
/// slot stays set, and overlapping intervals simply union their ranges.
/// Occupancy is boolean, not a load count.
///
/// # Example
///
/// ```
/// use room_occupancy::occupancy::OccupancySlots;
///
/// let mut slots = OccupancySlots::new();
/// slots.mark(900, 1030);
/// assert!(slots.is_occupied(2)); // 9 AM
/// assert!(slots.is_occupied(3)); // the partially used 10 AM hour
/// assert!(!slots.is_occupied(4));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancySlots([bool; SLOT_COUNT]);

impl OccupancySlots {
    /// Creates an all-unoccupied slot vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks every slot the interval `[start, end)` touches.
    ///
    /// Times are hour-hundreds integers already validated by the row filter:
    /// `start` in [700, 2100] and `end` in [700, 2200]. An end time with a
    /// nonzero sub-hour remainder still occupies its final hour, so 1030
    /// marks the 10 AM slot. An interval that ends at or before its start
    /// marks nothing.
    pub fn mark(&mut self, start: i32, end: i32) {
        let begin_slot = start / 100;
        let mut end_slot = end / 100;
        // A partially used final hour still counts as occupied.
        if end_slot * 100 < end {
            end_slot += 1;
        }

        for hour in begin_slot..end_slot {
            self.0[(hour - FIRST_SLOT_HOUR) as usize] = true;
        }
    }

    /// Returns whether the given slot is occupied.
    pub fn is_occupied(&self, slot: usize) -> bool {
        self.0[slot]
    }

    /// Returns true if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&occupied| occupied)
    }

    /// The slot flags in order, slot 0 first.
    pub fn flags(&self) -> &[bool; SLOT_COUNT] {
        &self.0
    }

    /// Returns the union of two slot vectors.
    pub fn union(&self, other: &OccupancySlots) -> OccupancySlots {
        let mut merged = *self;
        for (slot, &occupied) in other.0.iter().enumerate() {
            if occupied {
                merged.0[slot] = true;
            }
        }
        merged
    }
}
