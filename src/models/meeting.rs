//! Class meeting model.
//!
//! This module defines the ClassMeeting struct, the record produced by the
//! row filter for every schedule row that passed the data-quality policy.

use serde::{Deserialize, Serialize};

use super::Day;

/// A scheduled class meeting that passed every filter rule.
///
/// Start and end times are integers in hour-hundreds form (1430 is 2:30 PM),
/// already validated to lie in [700, 2100] and [700, 2200] respectively.
/// `days` is the raw day-letter string from the schedule, e.g. "MWF".
///
/// # Example
///
/// ```
/// use room_occupancy::models::{ClassMeeting, Day};
///
/// let meeting = ClassMeeting {
///     crn: "12345".to_string(),
///     days: "MWF".to_string(),
///     start: 900,
///     end: 1030,
///     room: "SCI 101".to_string(),
/// };
/// assert!(meeting.meets_on(Day::Wednesday));
/// assert!(!meeting.meets_on(Day::Tuesday));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMeeting {
    /// The course reference number, carried through for diagnostics.
    pub crn: String,
    /// The day-letter string, characters drawn from M, T, W, R, F, S.
    pub days: String,
    /// Meeting start time in hour-hundreds, in [700, 2100].
    pub start: i32,
    /// Meeting end time in hour-hundreds, in [700, 2200].
    pub end: i32,
    /// The room identifier, exactly as it appears in the schedule.
    pub room: String,
}

impl ClassMeeting {
    /// Returns the weekdays this meeting occurs on, one per day letter.
    ///
    /// Unrecognized letters yield [`Day::Unknown`], which never matches a
    /// report weekday.
    pub fn meeting_days(&self) -> impl Iterator<Item = Day> + '_ {
        self.days.chars().map(Day::from_code)
    }

    /// Returns true if any of this meeting's day letters names `day`.
    pub fn meets_on(&self, day: Day) -> bool {
        self.meeting_days().any(|d| d == day)
    }
}
