//! Overtime policy and minute bucketing.
//!
//! This module splits worked minutes into regular and overtime buckets:
//!
//! - **Overtime days** (weekend or holiday): no regular time; all worked
//!   minutes are overtime, rounded down to the rounding increment.
//! - **Regular days**: regular time is capped at the standard day. Time
//!   beyond it only counts once the qualification threshold is reached,
//!   after which it is rounded down to the rounding increment.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::DayType;

/// Regular minutes in a standard working day (8 hours).
pub const STANDARD_DAY_MINUTES: i64 = 480;

/// Overtime is rounded down to this many minutes (a quarter hour).
pub const OVERTIME_ROUNDING_MINUTES: i64 = 15;

/// Minutes past the standard day that must be worked before any weekday
/// overtime is credited (the full ninth hour).
pub const OVERTIME_QUALIFICATION_MINUTES: i64 = 60;

/// The overtime rules applied by the calculator.
///
/// The default policy is an 8-hour standard day, 15-minute rounding and a
/// 60-minute qualification threshold.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::OvertimePolicy;
///
/// let policy = OvertimePolicy::default();
/// assert_eq!(policy.standard_day_minutes, 480);
/// assert_eq!(policy.rounding_increment_minutes, 15);
/// assert_eq!(policy.qualification_threshold_minutes, 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimePolicy {
    /// Cap on regular minutes per weekday.
    pub standard_day_minutes: i64,
    /// Overtime is rounded down to a multiple of this.
    pub rounding_increment_minutes: i64,
    /// Weekday overtime below this many minutes is not credited.
    pub qualification_threshold_minutes: i64,
}

impl Default for OvertimePolicy {
    fn default() -> Self {
        Self {
            standard_day_minutes: STANDARD_DAY_MINUTES,
            rounding_increment_minutes: OVERTIME_ROUNDING_MINUTES,
            qualification_threshold_minutes: OVERTIME_QUALIFICATION_MINUTES,
        }
    }
}

impl OvertimePolicy {
    /// Checks that the policy values can be used for bucketing.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] when the standard day or the
    /// rounding increment is not positive, or the threshold is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.standard_day_minutes <= 0 {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "standard day must be positive, got {} minutes",
                    self.standard_day_minutes
                ),
            });
        }
        if self.rounding_increment_minutes <= 0 {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "rounding increment must be positive, got {} minutes",
                    self.rounding_increment_minutes
                ),
            });
        }
        if self.qualification_threshold_minutes < 0 {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "qualification threshold cannot be negative, got {} minutes",
                    self.qualification_threshold_minutes
                ),
            });
        }
        Ok(())
    }
}

/// Regular and overtime minutes for one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteBuckets {
    /// Minutes credited as regular time.
    pub regular_minutes: i64,
    /// Minutes credited as overtime.
    pub overtime_minutes: i64,
}

/// Rounds `minutes` down to a multiple of `increment`.
///
/// A non-positive increment leaves the value unchanged.
///
/// ```
/// use timecard_engine::calculation::round_down_to_increment;
///
/// assert_eq!(round_down_to_increment(127, 15), 120);
/// assert_eq!(round_down_to_increment(190, 15), 180);
/// assert_eq!(round_down_to_increment(14, 15), 0);
/// ```
pub fn round_down_to_increment(minutes: i64, increment: i64) -> i64 {
    if increment <= 0 {
        return minutes;
    }
    minutes.div_euclid(increment) * increment
}

/// Splits worked minutes into regular and overtime buckets.
///
/// # Examples
///
/// ## Ninth hour not completed
///
/// ```
/// use timecard_engine::calculation::{split_worked_minutes, DayType, OvertimePolicy};
///
/// let buckets = split_worked_minutes(539, DayType::Weekday, &OvertimePolicy::default());
/// assert_eq!(buckets.regular_minutes, 480);
/// assert_eq!(buckets.overtime_minutes, 0);
/// ```
///
/// ## Ninth hour completed
///
/// ```
/// use timecard_engine::calculation::{split_worked_minutes, DayType, OvertimePolicy};
///
/// let buckets = split_worked_minutes(607, DayType::Weekday, &OvertimePolicy::default());
/// assert_eq!(buckets.regular_minutes, 480);
/// assert_eq!(buckets.overtime_minutes, 120);
/// ```
///
/// ## Weekend
///
/// ```
/// use timecard_engine::calculation::{split_worked_minutes, DayType, OvertimePolicy};
///
/// let buckets = split_worked_minutes(190, DayType::Weekend, &OvertimePolicy::default());
/// assert_eq!(buckets.regular_minutes, 0);
/// assert_eq!(buckets.overtime_minutes, 180);
/// ```
pub fn split_worked_minutes(
    worked_minutes: i64,
    day_type: DayType,
    policy: &OvertimePolicy,
) -> MinuteBuckets {
    let worked_minutes = worked_minutes.max(0);

    if day_type.is_overtime_day() {
        return MinuteBuckets {
            regular_minutes: 0,
            overtime_minutes: round_down_to_increment(
                worked_minutes,
                policy.rounding_increment_minutes,
            ),
        };
    }

    let regular_minutes = worked_minutes.min(policy.standard_day_minutes);
    let raw_overtime = (worked_minutes - policy.standard_day_minutes).max(0);

    let overtime_minutes = if raw_overtime < policy.qualification_threshold_minutes {
        0
    } else {
        round_down_to_increment(raw_overtime, policy.rounding_increment_minutes)
    };

    MinuteBuckets {
        regular_minutes,
        overtime_minutes,
    }
}
