//! Room occupancy aggregation.
//!
//! This module builds the full occupancy table from the filtered class
//! meetings: every meeting's time interval is marked into the slot vector of
//! each weekday its day letters name, per room. Pure data transformation
//! over already-validated input; nothing here can fail.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{ClassMeeting, Day};

use super::slots::OccupancySlots;

/// Occupancy vectors for the six report weekdays of one room.
///
/// Every room always carries all six weekdays, Monday through Saturday; a
/// day with no meetings simply keeps its all-zero vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekOccupancy {
    days: [OccupancySlots; Day::WEEK.len()],
}

impl WeekOccupancy {
    /// The slot vector for a weekday, or `None` for [`Day::Unknown`].
    pub fn day(&self, day: Day) -> Option<&OccupancySlots> {
        day.week_index().map(|index| &self.days[index])
    }

    /// Iterates the weekdays in report order, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &OccupancySlots)> {
        Day::WEEK.iter().copied().zip(self.days.iter())
    }
}

/// The aggregated occupancy of every room that had an accepted meeting.
///
/// Rooms iterate in lexicographic order of their identifiers, exactly as
/// they appear in the schedule (no case folding).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyTable {
    rooms: BTreeMap<String, WeekOccupancy>,
}

impl OccupancyTable {
    /// Iterates rooms in lexicographic order with their weekly occupancy.
    pub fn rooms(&self) -> impl Iterator<Item = (&str, &WeekOccupancy)> {
        self.rooms.iter().map(|(room, week)| (room.as_str(), week))
    }

    /// The weekly occupancy of one room, if it had any accepted meeting.
    pub fn room(&self, room: &str) -> Option<&WeekOccupancy> {
        self.rooms.get(room)
    }

    /// The number of distinct rooms in the table.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Returns true if no room had an accepted meeting.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Aggregates accepted meetings into per-room weekly occupancy.
///
/// For each meeting, every recognized day letter marks the meeting's
/// interval into that weekday's slot vector for the meeting's room.
/// Unrecognized letters map to [`Day::Unknown`], which names no report
/// weekday and is skipped. Aggregation is order-independent: overlapping
/// meetings union their slots.
pub fn build_occupancy(meetings: &[ClassMeeting]) -> OccupancyTable {
    let mut rooms: BTreeMap<String, WeekOccupancy> = BTreeMap::new();

    for meeting in meetings {
        let week = rooms.entry(meeting.room.clone()).or_default();
        for day in meeting.meeting_days() {
            if let Some(index) = day.week_index() {
                week.days[index].mark(meeting.start, meeting.end);
            }
        }
    }

    OccupancyTable { rooms }
}
