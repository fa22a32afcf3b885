//! Shift computation.
//!
//! Turns a clock-in time, a clock-out time and a shift date into worked,
//! regular and overtime minutes. This is the only place the time parsing,
//! day detection and overtime bucketing are combined.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::holidays::HolidayCalendar;

use super::{
    DayType, OvertimePolicy, format_minutes, get_day_type, parse_time_of_day,
    split_worked_minutes, worked_minutes_between,
};

/// The result of computing a single shift.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::{ShiftComputation, DayType};
///
/// let computation = ShiftComputation {
///     in_time: chrono::NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     out_time: chrono::NaiveTime::from_hms_opt(18, 7, 0).unwrap(),
///     day_type: DayType::Weekday,
///     worked_minutes: 607,
///     regular_minutes: 480,
///     overtime_minutes: 120,
/// };
/// assert_eq!(computation.work_hours_display(), "10:07");
/// assert_eq!(computation.overtime_display(), "02:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftComputation {
    /// The parsed clock-in time.
    pub in_time: NaiveTime,
    /// The parsed clock-out time.
    pub out_time: NaiveTime,
    /// The kind of day the shift was worked on.
    pub day_type: DayType,
    /// Whole minutes between clock-in and clock-out.
    pub worked_minutes: i64,
    /// Minutes credited as regular time.
    pub regular_minutes: i64,
    /// Minutes credited as overtime.
    pub overtime_minutes: i64,
}

impl ShiftComputation {
    /// Returns true when the shift fell on a weekend or holiday.
    pub fn is_overtime_day(&self) -> bool {
        self.day_type.is_overtime_day()
    }

    /// Worked time as `HH:MM`.
    pub fn work_hours_display(&self) -> String {
        format_minutes(self.worked_minutes)
    }

    /// Credited overtime as `HH:MM`.
    pub fn overtime_display(&self) -> String {
        format_minutes(self.overtime_minutes)
    }
}

/// Computes worked, regular and overtime minutes for a shift.
///
/// # Arguments
///
/// * `in_time` - Clock-in time as `HH:MM AM/PM`
/// * `out_time` - Clock-out time as `HH:MM AM/PM`; earlier than `in_time`
///   means the shift ran past midnight
/// * `date` - The date the shift started on
/// * `holidays` - Holiday lookup consulted for the shift date
/// * `policy` - The overtime rules to apply
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`](crate::error::EngineError::InvalidTimeFormat)
/// if either time does not parse. Nothing is computed in that case.
///
/// # Examples
///
/// ## Overnight weekday shift
///
/// ```
/// use timecard_engine::calculation::{compute_shift, OvertimePolicy};
/// use timecard_engine::holidays::HolidayRegistry;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(); // Thursday
/// let result = compute_shift(
///     "10:00 PM",
///     "06:00 AM",
///     date,
///     &HolidayRegistry::new(),
///     &OvertimePolicy::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.worked_minutes, 480);
/// assert_eq!(result.regular_minutes, 480);
/// assert_eq!(result.overtime_minutes, 0);
/// ```
///
/// ## Saturday shift
///
/// ```
/// use timecard_engine::calculation::{compute_shift, OvertimePolicy};
/// use timecard_engine::holidays::HolidayRegistry;
/// use chrono::NaiveDate;
///
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// let result = compute_shift(
///     "09:00 AM",
///     "12:10 PM",
///     saturday,
///     &HolidayRegistry::new(),
///     &OvertimePolicy::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.worked_minutes, 190);
/// assert_eq!(result.regular_minutes, 0);
/// assert_eq!(result.overtime_minutes, 180);
/// ```
pub fn compute_shift<H>(
    in_time: &str,
    out_time: &str,
    date: NaiveDate,
    holidays: &H,
    policy: &OvertimePolicy,
) -> EngineResult<ShiftComputation>
where
    H: HolidayCalendar + ?Sized,
{
    let in_time = parse_time_of_day(in_time)?;
    let out_time = parse_time_of_day(out_time)?;
    Ok(compute_shift_times(in_time, out_time, date, holidays, policy))
}

/// Computes a shift from already-parsed clock times.
///
/// This is infallible: every pair of clock values describes a shift of
/// less than 24 hours.
pub fn compute_shift_times<H>(
    in_time: NaiveTime,
    out_time: NaiveTime,
    date: NaiveDate,
    holidays: &H,
    policy: &OvertimePolicy,
) -> ShiftComputation
where
    H: HolidayCalendar + ?Sized,
{
    let worked_minutes = worked_minutes_between(in_time, out_time);
    let day_type = get_day_type(date, holidays);
    let buckets = split_worked_minutes(worked_minutes, day_type, policy);

    ShiftComputation {
        in_time,
        out_time,
        day_type,
        worked_minutes,
        regular_minutes: buckets.regular_minutes,
        overtime_minutes: buckets.overtime_minutes,
    }
}
