//! The ledger of shift entries and its running totals.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::calculation::{OvertimePolicy, compute_shift, parse_date};
use crate::error::{EngineError, EngineResult};
use crate::holidays::HolidayRegistry;
use crate::models::{EntryId, EntryView, LedgerTotals, ShiftEntry, ShiftRow};

/// A row that could not be loaded during [`LedgerAggregator::bulk_load`].
#[derive(Debug)]
pub struct RowFailure {
    /// One-based position of the row in the input sequence.
    pub row: usize,
    /// The row as supplied.
    pub input: ShiftRow,
    /// Why the row was skipped.
    pub error: EngineError,
}

/// Outcome of a bulk load.
#[derive(Debug, Default)]
pub struct BulkLoadReport {
    /// Number of rows recorded as entries.
    pub loaded: usize,
    /// Rows that were skipped, in input order.
    pub failures: Vec<RowFailure>,
}

impl BulkLoadReport {
    /// Returns true when every row was loaded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Ordered shift entries with cached totals.
///
/// The totals always equal the sum of the contributions of the entries
/// currently present. Every mutation updates both together, and a shift
/// that fails to compute leaves the ledger untouched.
///
/// # Example
///
/// ```
/// use timecard_engine::ledger::LedgerAggregator;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::HashSet;
///
/// let mut ledger = LedgerAggregator::default();
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// let id = ledger.add_entry(thursday, "08:00 AM", "06:07 PM").unwrap().id;
/// assert_eq!(ledger.totals().regular_hours, Decimal::from(8));
/// assert_eq!(ledger.totals().overtime_hours, Decimal::from(2));
/// assert_eq!(ledger.totals().total_hours, Decimal::from(10));
///
/// ledger.delete_entries(&HashSet::from([id]));
/// assert!(ledger.is_empty());
/// assert_eq!(ledger.totals().total_hours, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LedgerAggregator {
    entries: Vec<ShiftEntry>,
    totals: LedgerTotals,
    holidays: HolidayRegistry,
    policy: OvertimePolicy,
}

impl LedgerAggregator {
    /// Creates an empty ledger using `policy`.
    pub fn new(policy: OvertimePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Replaces the holiday registry consulted for new entries.
    pub fn with_holidays(mut self, holidays: HolidayRegistry) -> Self {
        self.holidays = holidays;
        self
    }

    /// The overtime policy applied to new entries.
    pub fn policy(&self) -> &OvertimePolicy {
        &self.policy
    }

    /// The holiday registry consulted for new entries.
    pub fn holidays(&self) -> &HolidayRegistry {
        &self.holidays
    }

    /// Mutable access to the holiday registry.
    ///
    /// Changing holidays affects entries added afterwards only; recorded
    /// entries keep the contribution they were added with.
    pub fn holidays_mut(&mut self) -> &mut HolidayRegistry {
        &mut self.holidays
    }

    /// Computes a shift and records it at the end of the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimeFormat`] if either time fails to
    /// parse. The ledger is not modified in that case.
    pub fn add_entry(
        &mut self,
        date: NaiveDate,
        in_time: &str,
        out_time: &str,
    ) -> EngineResult<&ShiftEntry> {
        let computation = compute_shift(in_time, out_time, date, &self.holidays, &self.policy)?;
        let entry = ShiftEntry::from_computation(date, &computation);

        debug!(
            entry_id = %entry.id,
            date = %entry.date,
            day_type = %entry.day_type,
            worked_minutes = entry.worked_minutes,
            regular_minutes = entry.regular_minutes,
            overtime_minutes = entry.overtime_minutes,
            "Recorded shift entry"
        );

        self.totals.add(&entry.contribution);
        self.entries.push(entry);
        Ok(self.entries.last().expect("entry was just pushed"))
    }

    /// Like [`add_entry`](Self::add_entry) but takes the date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDateFormat`] or
    /// [`EngineError::InvalidTimeFormat`]; the ledger is not modified.
    pub fn add_entry_str(
        &mut self,
        date: &str,
        in_time: &str,
        out_time: &str,
    ) -> EngineResult<&ShiftEntry> {
        let date = parse_date(date)?;
        self.add_entry(date, in_time, out_time)
    }

    /// Removes the selected entries and subtracts their contributions.
    ///
    /// Ids not present in the ledger are ignored and an empty selection is
    /// a no-op. Returns the number of entries removed.
    pub fn delete_entries(&mut self, selection: &HashSet<EntryId>) -> usize {
        if selection.is_empty() {
            return 0;
        }

        let totals = &mut self.totals;
        let before = self.entries.len();
        self.entries.retain(|entry| {
            if selection.contains(&entry.id) {
                totals.subtract(&entry.contribution);
                debug!(entry_id = %entry.id, date = %entry.date, "Deleted shift entry");
                false
            } else {
                true
            }
        });

        before - self.entries.len()
    }

    /// Removes every entry and zeroes the totals.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.totals.reset();
        info!(removed, "Cleared ledger");
    }

    /// Replaces the ledger contents with `rows`, in order.
    ///
    /// A row whose date or times fail to parse is skipped and reported;
    /// the remaining rows are still loaded.
    pub fn bulk_load<I>(&mut self, rows: I) -> BulkLoadReport
    where
        I: IntoIterator<Item = ShiftRow>,
    {
        self.entries.clear();
        self.totals.reset();

        let mut report = BulkLoadReport::default();
        for (index, row) in rows.into_iter().enumerate() {
            match self.add_entry_str(&row.date, &row.in_time, &row.out_time) {
                Ok(_) => report.loaded += 1,
                Err(error) => {
                    warn!(row = index + 1, error = %error, "Skipping timecard row");
                    report.failures.push(RowFailure {
                        row: index + 1,
                        input: row,
                        error,
                    });
                }
            }
        }

        info!(
            loaded = report.loaded,
            skipped = report.failures.len(),
            "Bulk load finished"
        );
        report
    }

    /// A snapshot of the running totals.
    pub fn totals(&self) -> LedgerTotals {
        self.totals
    }

    /// Totals recomputed from the stored entry contributions.
    ///
    /// Matches [`totals`](Self::totals) up to the zero floor applied on
    /// deletion.
    pub fn recomputed_totals(&self) -> LedgerTotals {
        let mut totals = LedgerTotals::default();
        for entry in &self.entries {
            totals.add(&entry.contribution);
        }
        totals
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[ShiftEntry] {
        &self.entries
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: EntryId) -> Option<&ShiftEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the ledger has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display-ready rows in insertion order.
    pub fn export_rows(&self) -> Vec<EntryView> {
        self.entries.iter().map(ShiftEntry::view).collect()
    }
}
