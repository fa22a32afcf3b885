//! Core data models for the Timecard Engine.
//!
//! This module contains the domain models recorded and reported by a ledger.

mod ledger_totals;
mod shift_entry;

pub use ledger_totals::{LedgerTotals, hours_for_display};
pub use shift_entry::{
    EntryContribution, EntryId, EntryView, ShiftEntry, ShiftRow, minutes_to_hours,
};
