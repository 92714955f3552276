//! Weekday handling for schedule day-letter codes.
//!
//! Schedule rows carry meeting days as a short string of day letters such as
//! "MWF". This module maps those letters onto a closed weekday enumeration,
//! with an explicit Unknown fallback for letters outside the alphabet.

use serde::{Deserialize, Serialize};

/// A weekday named by a schedule day-letter code.
///
/// The report covers Monday through Saturday; `R` means Thursday to
/// disambiguate from `T` for Tuesday. Any letter outside the alphabet maps
/// to [`Day::Unknown`] rather than failing.
///
/// # Example
///
/// ```
/// use room_occupancy::models::Day;
///
/// assert_eq!(Day::from_code('R'), Day::Thursday);
/// assert_eq!(Day::from_code('X'), Day::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Day {
    /// Day letter `M`.
    Monday,
    /// Day letter `T`.
    Tuesday,
    /// Day letter `W`.
    Wednesday,
    /// Day letter `R`.
    Thursday,
    /// Day letter `F`.
    Friday,
    /// Day letter `S`.
    Saturday,
    /// Any letter outside the recognized alphabet.
    Unknown,
}

impl Day {
    /// The six report weekdays in emission order. Sunday is not scheduled.
    pub const WEEK: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Maps a day-letter code to its weekday.
    ///
    /// Total over all characters: unrecognized letters yield
    /// [`Day::Unknown`].
    pub fn from_code(code: char) -> Self {
        match code {
            'M' => Day::Monday,
            'T' => Day::Tuesday,
            'W' => Day::Wednesday,
            'R' => Day::Thursday,
            'F' => Day::Friday,
            'S' => Day::Saturday,
            _ => Day::Unknown,
        }
    }

    /// Position of this day within [`Day::WEEK`], or `None` for
    /// [`Day::Unknown`].
    pub fn week_index(&self) -> Option<usize> {
        Day::WEEK.iter().position(|day| day == self)
    }

    /// Returns the full day name used in the report.
    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
