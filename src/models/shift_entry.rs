//! Shift entry model and related types.
//!
//! This module defines the [`ShiftEntry`] recorded by the ledger, the raw
//! [`ShiftRow`] supplied by import, and the display-ready [`EntryView`].

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{
    DayType, ShiftComputation, format_date, format_minutes, format_time_of_day,
};

/// Identity of an entry within a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generates a fresh random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Converts a minute count to fractional hours.
///
/// ```
/// use timecard_engine::models::minutes_to_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_hours(90), Decimal::new(15, 1)); // 1.5
/// ```
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

/// The hours a single entry adds to each ledger total.
///
/// On a regular day the entry adds its regular and credited overtime hours,
/// and their sum to the total. On an overtime day the full unrounded worked
/// time goes to both overtime and total, and nothing to regular.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::{ShiftComputation, DayType};
/// use timecard_engine::models::EntryContribution;
/// use rust_decimal::Decimal;
///
/// let saturday = ShiftComputation {
///     in_time: chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     out_time: chrono::NaiveTime::from_hms_opt(12, 10, 0).unwrap(),
///     day_type: DayType::Weekend,
///     worked_minutes: 190,
///     regular_minutes: 0,
///     overtime_minutes: 180,
/// };
///
/// let contribution = EntryContribution::from_computation(&saturday);
/// assert_eq!(contribution.regular_hours, Decimal::ZERO);
/// assert_eq!(contribution.overtime_hours, contribution.total_hours);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryContribution {
    /// Hours added to the regular total.
    pub regular_hours: Decimal,
    /// Hours added to the overtime total.
    pub overtime_hours: Decimal,
    /// Hours added to the overall total.
    pub total_hours: Decimal,
}

impl EntryContribution {
    /// Derives the contribution for a computed shift.
    pub fn from_computation(computation: &ShiftComputation) -> Self {
        if computation.is_overtime_day() {
            let worked = minutes_to_hours(computation.worked_minutes);
            Self {
                regular_hours: Decimal::ZERO,
                overtime_hours: worked,
                total_hours: worked,
            }
        } else {
            let regular_hours = minutes_to_hours(computation.regular_minutes);
            let overtime_hours = minutes_to_hours(computation.overtime_minutes);
            Self {
                regular_hours,
                overtime_hours,
                total_hours: regular_hours + overtime_hours,
            }
        }
    }
}

/// A computed shift recorded in a ledger.
///
/// Entries are never edited in place; a correction is a delete followed by
/// a new add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEntry {
    /// Identity used to select the entry for deletion.
    pub id: EntryId,
    /// The date the shift started on.
    pub date: NaiveDate,
    /// Clock-in time.
    pub in_time: NaiveTime,
    /// Clock-out time.
    pub out_time: NaiveTime,
    /// Whether the shift fell on a weekday, weekend or holiday.
    pub day_type: DayType,
    /// Whole minutes worked.
    pub worked_minutes: i64,
    /// Minutes credited as regular time.
    pub regular_minutes: i64,
    /// Minutes credited as overtime.
    pub overtime_minutes: i64,
    /// What this entry added to the ledger totals when it was recorded.
    pub contribution: EntryContribution,
}

impl ShiftEntry {
    /// Builds an entry with a fresh identity from a computed shift.
    pub fn from_computation(date: NaiveDate, computation: &ShiftComputation) -> Self {
        Self {
            id: EntryId::new(),
            date,
            in_time: computation.in_time,
            out_time: computation.out_time,
            day_type: computation.day_type,
            worked_minutes: computation.worked_minutes,
            regular_minutes: computation.regular_minutes,
            overtime_minutes: computation.overtime_minutes,
            contribution: EntryContribution::from_computation(computation),
        }
    }

    /// Returns true when the shift fell on a weekend or holiday.
    pub fn is_overtime_day(&self) -> bool {
        self.day_type.is_overtime_day()
    }

    /// The display-ready view of this entry.
    pub fn view(&self) -> EntryView {
        EntryView {
            date: format_date(self.date),
            in_time: format_time_of_day(self.in_time),
            out_time: format_time_of_day(self.out_time),
            work_hours: format_minutes(self.worked_minutes),
            overtime: format_minutes(self.overtime_minutes),
        }
    }
}

/// A raw, unparsed shift as read from an import file or form.
///
/// Field names match the import file headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRow {
    /// Shift date, expected as `YYYY-MM-DD`.
    #[serde(rename = "Date")]
    pub date: String,
    /// Clock-in time, expected as `HH:MM AM/PM`.
    #[serde(rename = "In Time")]
    pub in_time: String,
    /// Clock-out time, expected as `HH:MM AM/PM`.
    #[serde(rename = "Out Time")]
    pub out_time: String,
}

impl ShiftRow {
    /// Creates a row from its three cells.
    pub fn new(
        date: impl Into<String>,
        in_time: impl Into<String>,
        out_time: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            in_time: in_time.into(),
            out_time: out_time.into(),
        }
    }
}

/// Display strings for one entry, in export column order.
///
/// # Example
///
/// ```
/// use timecard_engine::models::EntryView;
///
/// let view = EntryView {
///     date: "2026-01-15".to_string(),
///     in_time: "08:00 AM".to_string(),
///     out_time: "06:07 PM".to_string(),
///     work_hours: "10:07".to_string(),
///     overtime: "02:00".to_string(),
/// };
/// assert_eq!(view.cells()[3], "10:07");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
    /// Shift date as `YYYY-MM-DD`.
    #[serde(rename = "Date")]
    pub date: String,
    /// Clock-in as `HH:MM AM/PM`.
    #[serde(rename = "In Time")]
    pub in_time: String,
    /// Clock-out as `HH:MM AM/PM`.
    #[serde(rename = "Out Time")]
    pub out_time: String,
    /// Worked time as `HH:MM`.
    #[serde(rename = "Work Hours")]
    pub work_hours: String,
    /// Credited overtime as `HH:MM`.
    #[serde(rename = "Overtime")]
    pub overtime: String,
}

impl EntryView {
    /// The five cells in column order.
    pub fn cells(&self) -> [&str; 5] {
        [
            self.date.as_str(),
            self.in_time.as_str(),
            self.out_time.as_str(),
            self.work_hours.as_str(),
            self.overtime.as_str(),
        ]
    }
}
