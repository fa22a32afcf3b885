//! CSV import of timecard rows.
//!
//! Reads files with `Date`, `In Time` and `Out Time` columns into
//! [`ShiftRow`]s for [`LedgerAggregator::bulk_load`](super::LedgerAggregator::bulk_load).
//! Cells are not parsed here, so a bad value only fails its own row.
//! Other columns, such as the `Work Hours` and `Overtime` columns of an
//! exported file, are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, Trim};

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftRow;

/// Header of the date column.
pub const DATE_COLUMN: &str = "Date";
/// Header of the clock-in column.
pub const IN_TIME_COLUMN: &str = "In Time";
/// Header of the clock-out column.
pub const OUT_TIME_COLUMN: &str = "Out Time";

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnMapping {
    date: usize,
    in_time: usize,
    out_time: usize,
}

impl ColumnMapping {
    fn from_headers(headers: &ByteRecord) -> EngineResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| String::from_utf8_lossy(header).trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| EngineError::Import {
                    message: format!("missing column '{}'", name),
                })
        };

        Ok(Self {
            date: find(DATE_COLUMN)?,
            in_time: find(IN_TIME_COLUMN)?,
            out_time: find(OUT_TIME_COLUMN)?,
        })
    }

    // Only the mapped cells are decoded; bytes elsewhere in the record are ignored
    fn row(&self, record: &ByteRecord) -> ShiftRow {
        let cell = |index: usize| {
            String::from_utf8_lossy(record.get(index).unwrap_or_default()).into_owned()
        };
        ShiftRow {
            date: cell(self.date),
            in_time: cell(self.in_time),
            out_time: cell(self.out_time),
        }
    }
}

/// Reads timecard rows from CSV data with a header row.
///
/// Short rows yield empty cells rather than an error. Cells are decoded
/// lossily, so invalid UTF-8 in a mapped cell fails only that row once it
/// reaches the ledger, and invalid UTF-8 in any other column is ignored.
///
/// # Errors
///
/// Returns [`EngineError::Import`] if a required column is missing or the
/// data is not readable CSV.
///
/// # Example
///
/// ```
/// use timecard_engine::ledger::import::read_rows;
///
/// let data = "Date,In Time,Out Time\n2026-01-15,08:00 AM,05:00 PM\n";
/// let rows = read_rows(data.as_bytes()).unwrap();
///
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].in_time, "08:00 AM");
/// ```
pub fn read_rows<R: Read>(reader: R) -> EngineResult<Vec<ShiftRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.byte_headers().map_err(import_error)?.clone();
    let mapping = ColumnMapping::from_headers(&headers)?;

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(import_error)?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        rows.push(mapping.row(&record));
    }
    Ok(rows)
}

/// Reads timecard rows from a CSV file.
///
/// # Errors
///
/// Returns [`EngineError::Import`] if the file cannot be opened or read.
pub fn read_rows_from_path<P: AsRef<Path>>(path: P) -> EngineResult<Vec<ShiftRow>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| EngineError::Import {
        message: format!("cannot open '{}': {}", path.display(), e),
    })?;
    read_rows(file)
}

fn import_error(error: csv::Error) -> EngineError {
    EngineError::Import {
        message: error.to_string(),
    }
}
