//! Schedule row filtering.
//!
//! Each raw row is tested against a fixed sequence of rejection rules; the
//! first matching rule wins. Rejected rows are counted and dropped, never
//! fatal. Out-of-range start and end times additionally raise a visible
//! warning naming the file line, since they usually mean upstream data-entry
//! mistakes worth a human's attention.

use std::collections::HashSet;

use csv::StringRecord;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{ReportError, ReportResult};
use crate::input::ScheduleTable;
use crate::models::ClassMeeting;

/// Earliest acceptable start time, hour-hundreds.
pub const START_MIN: i32 = 700;
/// Latest acceptable start time, hour-hundreds.
pub const START_MAX: i32 = 2100;
/// Earliest acceptable end time, hour-hundreds.
pub const END_MIN: i32 = 700;
/// Latest acceptable end time, hour-hundreds.
pub const END_MAX: i32 = 2200;

/// Named tallies of every filtering outcome.
///
/// Purely diagnostic: no downstream logic depends on these values. The
/// filter returns them as one immutable structure per pass rather than
/// accumulating shared counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCounts {
    /// Data rows examined, including blank and malformed ones.
    pub total_rows: usize,
    /// Rows whose field count did not match the header (blank lines mostly).
    pub malformed: usize,
    /// Rows with an empty or single-space ROOM field.
    pub room_empty: usize,
    /// Rows for a term other than the requested one.
    pub wrong_term: usize,
    /// Rows whose ROOM contains "ONLINE".
    pub online: usize,
    /// Rows repeating a cross-listing id already accepted.
    pub cross_list_duplicates: usize,
    /// Accepted rows that carried no cross-listing id.
    pub cross_list_empty: usize,
    /// Rows with an empty START or END field.
    pub start_or_end_empty: usize,
    /// Rows whose start time fell outside the acceptable range.
    pub bad_start: usize,
    /// Rows whose end time fell outside the acceptable range.
    pub bad_end: usize,
    /// Rows that passed every rule.
    pub accepted: usize,
}

/// The result of one filtering pass: accepted meetings in encounter order,
/// plus the rejection tallies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Rows that passed every rule, in original encounter order.
    pub accepted: Vec<ClassMeeting>,
    /// Tallies of every outcome.
    pub counts: FilterCounts,
}

/// Filters the rows of a schedule table against the requested term.
///
/// Rules are checked per row in priority order; the first match wins:
///
/// 1. field count differs from the header — malformed
/// 2. ROOM empty or a single space
/// 3. TERM differs from `term`
/// 4. ROOM contains "ONLINE" (cross-listed online sections book no room)
/// 5. non-empty XLST already seen on an accepted row — sections that
///    cross-list share one physical meeting, so later ones would
///    double-count occupancy
/// 6. START or END empty
/// 7. START outside [700, 2100] — counted and warned
/// 8. END outside [700, 2200] — counted and warned
///
/// Accepted rows record their non-empty XLST for later duplicate checks.
///
/// # Errors
///
/// Returns [`ReportError::InvalidTime`] when a START or END field that
/// reaches the numeric-range checks is not an integer. Nothing else fails.
pub fn filter_rows(table: &ScheduleTable, term: &str) -> ReportResult<FilterOutcome> {
    let columns = table.columns();
    let header_len = table.header().len();

    let mut counts = FilterCounts {
        total_rows: table.blank_row_count() + table.rows().len(),
        malformed: table.blank_row_count(),
        ..FilterCounts::default()
    };
    let mut seen_xlst: HashSet<String> = HashSet::new();
    let mut accepted = Vec::new();

    for record in table.rows() {
        let line = record_line(record);

        if record.len() != header_len {
            counts.malformed += 1;
            continue;
        }

        let room = columns.room(record);
        if room.is_empty() || room == " " {
            counts.room_empty += 1;
            continue;
        }

        if columns.term(record) != term {
            counts.wrong_term += 1;
            continue;
        }

        // Substring, not equality: the data sometimes reads "ONLINE ".
        if room.contains("ONLINE") {
            counts.online += 1;
            continue;
        }

        let xlst = columns.xlst(record);
        if !xlst.is_empty() && seen_xlst.contains(xlst) {
            counts.cross_list_duplicates += 1;
            continue;
        }

        let start_raw = columns.start(record);
        let end_raw = columns.end(record);
        if start_raw.is_empty() || end_raw.is_empty() {
            counts.start_or_end_empty += 1;
            continue;
        }

        let start = parse_time(start_raw, "START", line)?;
        if !(START_MIN..=START_MAX).contains(&start) {
            warn!(row = line, value = start_raw, "start time out of range");
            counts.bad_start += 1;
            continue;
        }

        let end = parse_time(end_raw, "END", line)?;
        if !(END_MIN..=END_MAX).contains(&end) {
            warn!(row = line, value = end_raw, "end time out of range");
            counts.bad_end += 1;
            continue;
        }

        if xlst.is_empty() {
            counts.cross_list_empty += 1;
        } else {
            seen_xlst.insert(xlst.to_string());
        }

        counts.accepted += 1;
        accepted.push(ClassMeeting {
            crn: columns.crn(record).to_string(),
            days: columns.days(record).to_string(),
            start,
            end,
            room: room.to_string(),
        });
    }

    info!(
        total_rows = counts.total_rows,
        malformed = counts.malformed,
        room_empty = counts.room_empty,
        wrong_term = counts.wrong_term,
        online = counts.online,
        cross_list_duplicates = counts.cross_list_duplicates,
        cross_list_empty = counts.cross_list_empty,
        start_or_end_empty = counts.start_or_end_empty,
        bad_start = counts.bad_start,
        bad_end = counts.bad_end,
        accepted = counts.accepted,
        "schedule rows filtered"
    );

    Ok(FilterOutcome { accepted, counts })
}

/// File line of a record, header counted as line one.
fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Parses an hour-hundreds field as a signed integer, so negative values
/// fall through to the range rejections instead of failing here.
fn parse_time(raw: &str, field: &str, line: u64) -> ReportResult<i32> {
    raw.parse::<i32>().map_err(|_| ReportError::InvalidTime {
        row: line,
        field: field.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "TERM,CAMPUS,XLST,CRN,DAYS,START,END,ROOM";
    const TERM: &str = "202408";

    fn run(rows: &[&str]) -> FilterOutcome {
        let content = format!("{HEADER}\r\n{}\r\n", rows.join("\r\n"));
        let table = ScheduleTable::from_csv_str(&content).unwrap();
        filter_rows(&table, TERM).unwrap()
    }

    fn row(xlst: &str, crn: &str, days: &str, start: &str, end: &str, room: &str) -> String {
        format!("{TERM},MAIN,{xlst},{crn},{days},{start},{end},{room}")
    }

    #[test]
    fn test_accepts_a_clean_row() {
        let outcome = run(&[&row("", "10001", "MWF", "900", "950", "SCI 101")]);
        assert_eq!(outcome.counts.accepted, 1);
        assert_eq!(outcome.counts.cross_list_empty, 1);
        assert_eq!(
            outcome.accepted,
            vec![ClassMeeting {
                crn: "10001".to_string(),
                days: "MWF".to_string(),
                start: 900,
                end: 950,
                room: "SCI 101".to_string(),
            }]
        );
    }

    #[test]
    fn test_short_row_is_malformed() {
        let outcome = run(&["junk,row", &row("", "10001", "MWF", "900", "950", "SCI 101")]);
        assert_eq!(outcome.counts.malformed, 1);
        assert_eq!(outcome.counts.accepted, 1);
    }

    #[test]
    fn test_blank_line_is_malformed() {
        let content = format!(
            "{HEADER}\r\n\r\n{}\r\n",
            row("", "10001", "MWF", "900", "950", "SCI 101")
        );
        let table = ScheduleTable::from_csv_str(&content).unwrap();
        let outcome = filter_rows(&table, TERM).unwrap();
        assert_eq!(outcome.counts.malformed, 1);
        assert_eq!(outcome.counts.total_rows, 2);
        assert_eq!(outcome.counts.accepted, 1);
    }

    #[test]
    fn test_empty_room_is_rejected() {
        let outcome = run(&[&row("", "10001", "MWF", "900", "950", "")]);
        assert_eq!(outcome.counts.room_empty, 1);
        assert_eq!(outcome.counts.accepted, 0);
    }

    #[test]
    fn test_single_space_room_is_rejected() {
        let outcome = run(&[&format!("{TERM},MAIN,,10001,MWF,900,950,\" \"")]);
        assert_eq!(outcome.counts.room_empty, 1);
        assert_eq!(outcome.counts.accepted, 0);
    }

    #[test]
    fn test_wrong_term_is_rejected() {
        let outcome = run(&["202501,MAIN,,10001,MWF,900,950,SCI 101"]);
        assert_eq!(outcome.counts.wrong_term, 1);
        assert_eq!(outcome.counts.accepted, 0);
    }

    #[test]
    fn test_online_room_is_rejected_by_substring() {
        let outcome = run(&[&row("", "10001", "MWF", "900", "950", "ONLINE A")]);
        assert_eq!(outcome.counts.online, 1);
        assert_eq!(outcome.counts.accepted, 0);
    }

    #[test]
    fn test_lowercase_online_is_not_matched() {
        let outcome = run(&[&row("", "10001", "MWF", "900", "950", "online a")]);
        assert_eq!(outcome.counts.online, 0);
        assert_eq!(outcome.counts.accepted, 1);
    }

    #[test]
    fn test_duplicate_cross_listing_keeps_first_row() {
        let outcome = run(&[
            &row("AB1", "10001", "MWF", "900", "950", "SCI 101"),
            &row("AB1", "10002", "MWF", "900", "950", "SCI 102"),
        ]);
        assert_eq!(outcome.counts.cross_list_duplicates, 1);
        assert_eq!(outcome.counts.accepted, 1);
        assert_eq!(outcome.accepted[0].crn, "10001");
    }

    #[test]
    fn test_empty_cross_listing_never_deduplicates() {
        let outcome = run(&[
            &row("", "10001", "MWF", "900", "950", "SCI 101"),
            &row("", "10002", "TR", "1000", "1120", "SCI 102"),
        ]);
        assert_eq!(outcome.counts.cross_list_duplicates, 0);
        assert_eq!(outcome.counts.accepted, 2);
        assert_eq!(outcome.counts.cross_list_empty, 2);
    }

    #[test]
    fn test_rejected_row_does_not_reserve_cross_listing() {
        // The first AB1 row is rejected for its term, so the second one is
        // still the first *accepted* AB1.
        let outcome = run(&[
            "202501,MAIN,AB1,10001,MWF,900,950,SCI 101",
            &row("AB1", "10002", "MWF", "900", "950", "SCI 102"),
        ]);
        assert_eq!(outcome.counts.wrong_term, 1);
        assert_eq!(outcome.counts.cross_list_duplicates, 0);
        assert_eq!(outcome.counts.accepted, 1);
        assert_eq!(outcome.accepted[0].crn, "10002");
    }

    #[test]
    fn test_empty_start_or_end_is_rejected() {
        let outcome = run(&[
            &row("", "10001", "MWF", "", "950", "SCI 101"),
            &row("", "10002", "MWF", "900", "", "SCI 102"),
        ]);
        assert_eq!(outcome.counts.start_or_end_empty, 2);
        assert_eq!(outcome.counts.accepted, 0);
    }

    #[test]
    fn test_start_out_of_range_is_rejected() {
        let outcome = run(&[
            &row("", "10001", "MWF", "630", "950", "SCI 101"),
            &row("", "10002", "MWF", "2130", "2200", "SCI 102"),
        ]);
        assert_eq!(outcome.counts.bad_start, 2);
        assert_eq!(outcome.counts.accepted, 0);
    }

    #[test]
    fn test_end_out_of_range_is_rejected() {
        let outcome = run(&[
            &row("", "10001", "MWF", "900", "650", "SCI 101"),
            &row("", "10002", "MWF", "900", "2230", "SCI 102"),
        ]);
        assert_eq!(outcome.counts.bad_end, 2);
        assert_eq!(outcome.counts.accepted, 0);
    }

    #[test]
    fn test_boundary_times_are_accepted() {
        let outcome = run(&[
            &row("", "10001", "MWF", "700", "2200", "SCI 101"),
            &row("", "10002", "MWF", "2100", "2150", "SCI 102"),
        ]);
        assert_eq!(outcome.counts.accepted, 2);
    }

    #[test]
    fn test_negative_start_is_out_of_range_not_fatal() {
        let outcome = run(&[&row("", "10001", "MWF", "-100", "950", "SCI 101")]);
        assert_eq!(outcome.counts.bad_start, 1);
        assert_eq!(outcome.counts.accepted, 0);
    }

    #[test]
    fn test_non_numeric_start_fails_loudly() {
        let content = format!(
            "{HEADER}\r\n{}\r\n",
            row("", "10001", "MWF", "9:00", "950", "SCI 101")
        );
        let table = ScheduleTable::from_csv_str(&content).unwrap();
        let result = filter_rows(&table, TERM);
        match result {
            Err(ReportError::InvalidTime { row, field, value }) => {
                assert_eq!(row, 2);
                assert_eq!(field, "START");
                assert_eq!(value, "9:00");
            }
            other => panic!("Expected InvalidTime error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_time_on_rejected_row_is_never_parsed() {
        // The room is empty, so rule 2 wins before the time fields are read.
        let outcome = run(&[&row("", "10001", "MWF", "abc", "def", "")]);
        assert_eq!(outcome.counts.room_empty, 1);
    }

    #[test]
    fn test_rules_apply_in_priority_order() {
        // Wrong term *and* an online room: wrong term is checked first.
        let outcome = run(&["202501,MAIN,,10001,MWF,900,950,ONLINE A"]);
        assert_eq!(outcome.counts.wrong_term, 1);
        assert_eq!(outcome.counts.online, 0);
    }

    #[test]
    fn test_accepted_rows_keep_encounter_order() {
        let outcome = run(&[
            &row("", "10003", "M", "900", "950", "C"),
            &row("", "10001", "T", "900", "950", "A"),
            &row("", "10002", "W", "900", "950", "B"),
        ]);
        let crns: Vec<&str> = outcome.accepted.iter().map(|m| m.crn.as_str()).collect();
        assert_eq!(crns, vec!["10003", "10001", "10002"]);
    }

    #[test]
    fn test_all_accepted_times_are_in_range() {
        let outcome = run(&[
            &row("", "10001", "MWF", "700", "800", "A"),
            &row("", "10002", "TR", "2100", "2200", "B"),
            &row("", "10003", "S", "630", "700", "C"),
            &row("", "10004", "F", "1000", "2230", "D"),
        ]);
        for meeting in &outcome.accepted {
            assert!((START_MIN..=START_MAX).contains(&meeting.start));
            assert!((END_MIN..=END_MAX).contains(&meeting.end));
        }
        assert_eq!(outcome.counts.accepted, 2);
    }

    #[test]
    fn test_counts_add_up() {
        let outcome = run(&[
            &row("", "10001", "MWF", "900", "950", "SCI 101"),
            &row("", "10002", "MWF", "900", "950", "ONLINE"),
            "202501,MAIN,,10003,MWF,900,950,SCI 101",
            "short",
        ]);
        let c = &outcome.counts;
        let rejected = c.malformed
            + c.room_empty
            + c.wrong_term
            + c.online
            + c.cross_list_duplicates
            + c.start_or_end_empty
            + c.bad_start
            + c.bad_end;
        assert_eq!(c.accepted + rejected, c.total_rows);
        assert_eq!(c.total_rows, 4);
    }
}
