//! Schedule table reading.
//!
//! This module provides [`ScheduleTable`], the parsed form of one schedule
//! export: the header row, the positioned data rows, and the resolved
//! indices of the named columns the filter consults.
//!
//! The export is expected to be UTF-8 with a leading byte-order mark.
//! Stripping the mark is a pure preprocessing step here, so that column
//! lookups downstream never see an invisible prefix character. A file that
//! does not decode as UTF-8 is a fatal error; the pipeline must not run on
//! partially decoded data.

use std::fs;
use std::io;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::error::{ReportError, ReportResult};

/// The columns the filter and aggregator consult, resolved by exact header
/// name. Column order in the export is irrelevant. CAMPUS may be present
/// but is never read.
#[derive(Debug, Clone, Copy)]
pub struct Columns {
    term: usize,
    xlst: usize,
    crn: usize,
    days: usize,
    start: usize,
    end: usize,
    room: usize,
}

impl Columns {
    fn resolve(header: &[String]) -> ReportResult<Self> {
        let index_of = |name: &str| -> ReportResult<usize> {
            header
                .iter()
                .position(|field| field == name)
                .ok_or_else(|| ReportError::MissingColumn {
                    name: name.to_string(),
                })
        };

        Ok(Columns {
            term: index_of("TERM")?,
            xlst: index_of("XLST")?,
            crn: index_of("CRN")?,
            days: index_of("DAYS")?,
            start: index_of("START")?,
            end: index_of("END")?,
            room: index_of("ROOM")?,
        })
    }

    pub(crate) fn term<'r>(&self, row: &'r StringRecord) -> &'r str {
        row.get(self.term).unwrap_or("")
    }

    pub(crate) fn xlst<'r>(&self, row: &'r StringRecord) -> &'r str {
        row.get(self.xlst).unwrap_or("")
    }

    pub(crate) fn crn<'r>(&self, row: &'r StringRecord) -> &'r str {
        row.get(self.crn).unwrap_or("")
    }

    pub(crate) fn days<'r>(&self, row: &'r StringRecord) -> &'r str {
        row.get(self.days).unwrap_or("")
    }

    pub(crate) fn start<'r>(&self, row: &'r StringRecord) -> &'r str {
        row.get(self.start).unwrap_or("")
    }

    pub(crate) fn end<'r>(&self, row: &'r StringRecord) -> &'r str {
        row.get(self.end).unwrap_or("")
    }

    pub(crate) fn room<'r>(&self, row: &'r StringRecord) -> &'r str {
        row.get(self.room).unwrap_or("")
    }
}

/// One parsed schedule export, ready for filtering.
///
/// Rows are kept as raw CSV records, not typed structs, because the filter
/// must see field-count mismatches to count malformed rows. Each record
/// retains its file position, so diagnostics can name the offending line.
#[derive(Debug, Clone)]
pub struct ScheduleTable {
    header: Vec<String>,
    columns: Columns,
    rows: Vec<StringRecord>,
    blank_rows: usize,
    bom_stripped: bool,
}

impl ScheduleTable {
    /// Reads and parses a schedule export from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, is not valid
    /// UTF-8, has no header row, or lacks a required column.
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let bytes = fs::read(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ReportError::InputNotFound {
                    path: path_str.clone(),
                }
            } else {
                ReportError::InputRead {
                    path: path_str.clone(),
                    message: e.to_string(),
                }
            }
        })?;

        let content = String::from_utf8(bytes).map_err(|e| ReportError::InvalidEncoding {
            path: path_str,
            message: e.to_string(),
        })?;

        Self::from_csv_str(&content)
    }

    /// Parses a schedule export from already-decoded text.
    ///
    /// Strips a leading U+FEFF byte-order mark if present, counts blank
    /// lines (the filter rejects them as malformed), and resolves the named
    /// columns from the header row.
    pub fn from_csv_str(content: &str) -> ReportResult<Self> {
        let (content, bom_stripped) = match content.strip_prefix('\u{feff}') {
            Some(stripped) => (stripped, true),
            None => (content, false),
        };

        // The CSV parser silently skips empty lines; count them here so the
        // filter can still report them as malformed rows.
        let blank_rows = content.lines().filter(|line| line.is_empty()).count();

        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut records = reader.into_records();

        let header_record = match records.next() {
            Some(record) => record.map_err(|e| ReportError::Csv {
                message: e.to_string(),
            })?,
            None => return Err(ReportError::MissingHeader),
        };

        let header: Vec<String> = header_record.iter().map(|field| field.to_string()).collect();
        let columns = Columns::resolve(&header)?;

        let mut rows = Vec::new();
        for record in records {
            rows.push(record.map_err(|e| ReportError::Csv {
                message: e.to_string(),
            })?);
        }

        debug!(?header, bom_stripped, blank_rows, "parsed schedule header");

        Ok(ScheduleTable {
            header,
            columns,
            rows,
            blank_rows,
            bom_stripped,
        })
    }

    /// The header field names, byte-order mark already stripped.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The resolved column indices.
    pub(crate) fn columns(&self) -> &Columns {
        &self.columns
    }

    /// The data rows in file order, excluding the header.
    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// The number of blank lines the parser skipped.
    pub fn blank_row_count(&self) -> usize {
        self.blank_rows
    }

    /// Whether a leading byte-order mark was stripped from the input.
    pub fn bom_stripped(&self) -> bool {
        self.bom_stripped
    }
}
