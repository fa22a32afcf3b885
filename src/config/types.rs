//! Configuration types for the timecard engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from a YAML configuration file.

use serde::Deserialize;

use crate::calculation::OvertimePolicy;
use crate::holidays::{Holiday, HolidayRegistry};

/// The complete timecard configuration.
///
/// Every section is optional; an empty file yields the default policy and
/// no holidays.
///
/// ```yaml
/// policy:
///   standard_day_minutes: 480
///   rounding_increment_minutes: 15
///   qualification_threshold_minutes: 60
/// holidays:
///   - date: 2026-12-25
///     name: Christmas Day
///   - date: 2026-12-26
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimecardConfig {
    /// The overtime rules.
    pub policy: OvertimePolicy,
    /// Holidays registered at startup.
    pub holidays: Vec<Holiday>,
}

impl TimecardConfig {
    /// Builds a holiday registry from the configured holidays.
    pub fn holiday_registry(&self) -> HolidayRegistry {
        self.holidays.iter().cloned().collect()
    }
}
