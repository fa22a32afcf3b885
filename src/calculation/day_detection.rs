//! Day detection for overtime-day rules.
//!
//! Weekend days and registered holidays are "overtime days": every minute
//! worked on them is credited as overtime rather than regular time.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::holidays::HolidayCalendar;

/// Represents the type of day a shift is worked on.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::DayType;
///
/// assert!(DayType::Weekend.is_overtime_day());
/// assert!(DayType::Holiday.is_overtime_day());
/// assert!(!DayType::Weekday.is_overtime_day());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday that is not a registered holiday.
    Weekday,
    /// Saturday or Sunday.
    Weekend,
    /// A registered holiday, on any day of the week.
    Holiday,
}

impl DayType {
    /// Returns true when all worked time on this day counts as overtime.
    pub fn is_overtime_day(self) -> bool {
        matches!(self, DayType::Weekend | DayType::Holiday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Returns true for Saturday and Sunday.
///
/// ```
/// use timecard_engine::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday, 2026-01-19 a Monday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()));
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2026, 1, 19).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Determines the day type for a shift date.
///
/// A registered holiday takes precedence over the weekend so that a holiday
/// falling on a Saturday is reported as [`DayType::Holiday`]. Both are
/// overtime days either way.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::{get_day_type, DayType};
/// use timecard_engine::holidays::HolidayRegistry;
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(); // Friday
/// let mut holidays = HolidayRegistry::new();
/// assert_eq!(get_day_type(christmas, &holidays), DayType::Weekday);
///
/// holidays.add(christmas);
/// assert_eq!(get_day_type(christmas, &holidays), DayType::Holiday);
/// ```
pub fn get_day_type<H>(date: NaiveDate, holidays: &H) -> DayType
where
    H: HolidayCalendar + ?Sized,
{
    if holidays.is_holiday(date) {
        DayType::Holiday
    } else if is_weekend(date) {
        DayType::Weekend
    } else {
        DayType::Weekday
    }
}
