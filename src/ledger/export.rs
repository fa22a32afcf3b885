//! CSV export of ledger rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::{EngineError, EngineResult};
use crate::models::EntryView;

/// Writes entry views as CSV with the header
/// `Date,In Time,Out Time,Work Hours,Overtime`.
///
/// # Errors
///
/// Returns [`EngineError::Export`] if writing fails.
///
/// # Example
///
/// ```
/// use timecard_engine::ledger::{LedgerAggregator, export::write_csv};
///
/// let mut ledger = LedgerAggregator::default();
/// ledger.add_entry_str("2026-01-15", "08:00 AM", "06:07 PM").unwrap();
///
/// let mut out = Vec::new();
/// write_csv(&mut out, &ledger.export_rows()).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(
///     text,
///     "Date,In Time,Out Time,Work Hours,Overtime\n2026-01-15,08:00 AM,06:07 PM,10:07,02:00\n"
/// );
/// ```
pub fn write_csv<W: Write>(writer: W, rows: &[EntryView]) -> EngineResult<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    if rows.is_empty() {
        writer
            .write_record(["Date", "In Time", "Out Time", "Work Hours", "Overtime"])
            .map_err(export_error)?;
    }
    for row in rows {
        writer.serialize(row).map_err(export_error)?;
    }

    writer.flush().map_err(|e| EngineError::Export {
        message: e.to_string(),
    })
}

/// Writes entry views to a CSV file, replacing it if it exists.
///
/// # Errors
///
/// Returns [`EngineError::Export`] if the file cannot be created or written.
pub fn write_csv_to_path<P: AsRef<Path>>(path: P, rows: &[EntryView]) -> EngineResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| EngineError::Export {
        message: format!("cannot create '{}': {}", path.display(), e),
    })?;
    write_csv(file, rows)
}

fn export_error(error: csv::Error) -> EngineError {
    EngineError::Export {
        message: error.to_string(),
    }
}
