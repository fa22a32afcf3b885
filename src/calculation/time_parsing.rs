//! Parsing and formatting of timecard values.
//!
//! Clock times are entered on a 12-hour clock (`HH:MM AM/PM`), dates as
//! `YYYY-MM-DD`, and durations are displayed as zero-padded `HH:MM`.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::{EngineError, EngineResult};

/// The `strftime` pattern for clock-in and clock-out values.
pub const TIME_OF_DAY_FORMAT: &str = "%I:%M %p";

/// The `strftime` pattern for shift dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a 12-hour clock value such as `"08:30 AM"`.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`] if the value does not match
/// `HH:MM AM/PM`.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// let time = parse_time_of_day("10:15 PM").unwrap();
/// assert_eq!(time, NaiveTime::from_hms_opt(22, 15, 0).unwrap());
///
/// assert!(parse_time_of_day("22:15").is_err());
/// ```
pub fn parse_time_of_day(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_OF_DAY_FORMAT).map_err(|_| {
        EngineError::InvalidTimeFormat {
            value: value.to_string(),
        }
    })
}

/// Parses a shift date such as `"2026-01-15"`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateFormat`] if the value does not match
/// `YYYY-MM-DD` or names a day that does not exist.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_date("2026-01-15").unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
/// );
/// assert!(parse_date("2026-02-30").is_err());
/// ```
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        EngineError::InvalidDateFormat {
            value: value.to_string(),
        }
    })
}

/// Formats a clock value back to `HH:MM AM/PM`.
///
/// ```
/// use timecard_engine::calculation::format_time_of_day;
/// use chrono::NaiveTime;
///
/// let time = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
/// assert_eq!(format_time_of_day(time), "06:00 AM");
/// ```
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(TIME_OF_DAY_FORMAT).to_string()
}

/// Formats a shift date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats a minute count as zero-padded `HH:MM`.
///
/// Hours are not wrapped, so long durations render as e.g. `"120:30"`.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::format_minutes;
///
/// assert_eq!(format_minutes(0), "00:00");
/// assert_eq!(format_minutes(547), "09:07");
/// assert_eq!(format_minutes(7230), "120:30");
/// ```
pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Returns the whole minutes elapsed between two clock values.
///
/// When `out_time` is earlier than `in_time` the shift is assumed to cross
/// midnight once, so a day is added to `out_time`. Equal values yield zero.
/// Partial minutes are discarded.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::worked_minutes_between;
/// use chrono::NaiveTime;
///
/// let ten_pm = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let six_am = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
/// assert_eq!(worked_minutes_between(ten_pm, six_am), 480);
/// ```
pub fn worked_minutes_between(in_time: NaiveTime, out_time: NaiveTime) -> i64 {
    let mut elapsed = out_time.signed_duration_since(in_time);
    if elapsed < Duration::zero() {
        elapsed = elapsed + Duration::days(1);
    }
    elapsed.num_seconds() / 60
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_morning_time() {
        assert_eq!(parse_time_of_day("08:30 AM").unwrap(), time(8, 30));
    }

    #[test]
    fn test_parse_noon_and_midnight() {
        assert_eq!(parse_time_of_day("12:00 PM").unwrap(), time(12, 0));
        assert_eq!(parse_time_of_day("12:00 AM").unwrap(), time(0, 0));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_time_of_day("  05:45 PM ").unwrap(), time(17, 45));
    }

    #[test]
    fn test_parse_lowercase_meridiem() {
        assert_eq!(parse_time_of_day("05:45 pm").unwrap(), time(17, 45));
    }

    #[test]
    fn test_parse_rejects_24_hour_clock() {
        match parse_time_of_day("17:45") {
            Err(EngineError::InvalidTimeFormat { value }) => assert_eq!(value, "17:45"),
            other => panic!("Expected InvalidTimeFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_time_of_day("").is_err());
        assert!(parse_time_of_day("half past eight").is_err());
        assert!(parse_time_of_day("13:00 PM").is_err());
    }

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(
            parse_date("2026-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_date_invalid() {
        match parse_date("01/15/2026") {
            Err(EngineError::InvalidDateFormat { value }) => assert_eq!(value, "01/15/2026"),
            other => panic!("Expected InvalidDateFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_format_time_round_trip_normalizes_padding() {
        let parsed = parse_time_of_day("09:05 am").unwrap();
        assert_eq!(format_time_of_day(parsed), "09:05 AM");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date(date), "2026-03-07");
    }

    #[test]
    fn test_format_minutes_pads() {
        assert_eq!(format_minutes(5), "00:05");
        assert_eq!(format_minutes(60), "01:00");
        assert_eq!(format_minutes(480), "08:00");
    }

    #[test]
    fn test_format_minutes_clamps_negative() {
        assert_eq!(format_minutes(-30), "00:00");
    }

    #[test]
    fn test_worked_minutes_same_day() {
        assert_eq!(worked_minutes_between(time(8, 30), time(17, 0)), 510);
    }

    #[test]
    fn test_worked_minutes_zero_length() {
        assert_eq!(worked_minutes_between(time(9, 0), time(9, 0)), 0);
    }

    #[test]
    fn test_worked_minutes_overnight() {
        assert_eq!(worked_minutes_between(time(22, 0), time(6, 0)), 480);
        assert_eq!(worked_minutes_between(time(23, 45), time(0, 15)), 30);
    }

    #[test]
    fn test_worked_minutes_one_minute_short_of_a_day() {
        assert_eq!(worked_minutes_between(time(9, 1), time(9, 0)), 1439);
    }
}
