//! Holiday lookup for overtime-day rules.
//!
//! [`HolidayCalendar`] is the seam the calculator consults; the
//! [`HolidayRegistry`] is the in-memory set of holiday dates owned by a
//! ledger session.

mod registry;

pub use registry::{Holiday, HolidayRegistry};

use chrono::NaiveDate;

/// Answers whether a date is a holiday.
///
/// Implemented by [`HolidayRegistry`] and by any `Fn(NaiveDate) -> bool`.
///
/// # Example
///
/// ```
/// use timecard_engine::holidays::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let no_holidays = |_: NaiveDate| false;
/// assert!(!no_holidays.is_holiday(NaiveDate::from_ymd_opt(2026, 12, 25).unwrap()));
/// ```
pub trait HolidayCalendar {
    /// Returns true if `date` is a holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

impl<F> HolidayCalendar for F
where
    F: Fn(NaiveDate) -> bool,
{
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self(date)
    }
}
