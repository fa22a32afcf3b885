//! Calculation logic for the Timecard Engine.
//!
//! This module contains the pure shift calculator: parsing 12-hour clock
//! values and dates, detecting weekend and holiday overtime days, and
//! splitting worked minutes into regular and overtime buckets under an
//! [`OvertimePolicy`].

mod day_detection;
mod overtime;
mod shift_calculator;
mod time_parsing;

pub use day_detection::{DayType, get_day_type, is_weekend};
pub use overtime::{
    MinuteBuckets, OVERTIME_QUALIFICATION_MINUTES, OVERTIME_ROUNDING_MINUTES, OvertimePolicy,
    STANDARD_DAY_MINUTES, round_down_to_increment, split_worked_minutes,
};
pub use shift_calculator::{ShiftComputation, compute_shift, compute_shift_times};
pub use time_parsing::{
    DATE_FORMAT, TIME_OF_DAY_FORMAT, format_date, format_minutes, format_time_of_day, parse_date,
    parse_time_of_day, worked_minutes_between,
};
