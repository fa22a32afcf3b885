//! Running ledger totals.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calculation::format_minutes;

use super::EntryContribution;

/// Precision used when converting cached hour totals back to minutes, so
/// that repeated thirds of an hour do not truncate a whole minute away.
const MINUTE_CONVERSION_DP: u32 = 6;

/// Aggregate hours across all entries currently in a ledger.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{EntryContribution, LedgerTotals};
/// use rust_decimal::Decimal;
///
/// let mut totals = LedgerTotals::default();
/// let contribution = EntryContribution {
///     regular_hours: Decimal::from(8),
///     overtime_hours: Decimal::from(2),
///     total_hours: Decimal::from(10),
/// };
///
/// totals.add(&contribution);
/// assert_eq!(totals.total_hours, Decimal::from(10));
///
/// totals.subtract(&contribution);
/// totals.subtract(&contribution);
/// assert_eq!(totals.total_hours, Decimal::ZERO); // floored, never negative
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LedgerTotals {
    /// Total hours (regular plus overtime).
    pub total_hours: Decimal,
    /// Overtime hours.
    pub overtime_hours: Decimal,
    /// Regular hours.
    pub regular_hours: Decimal,
}

impl LedgerTotals {
    /// Adds an entry's contribution.
    pub fn add(&mut self, contribution: &EntryContribution) {
        self.total_hours += contribution.total_hours;
        self.overtime_hours += contribution.overtime_hours;
        self.regular_hours += contribution.regular_hours;
    }

    /// Removes an entry's contribution, flooring each total at zero.
    pub fn subtract(&mut self, contribution: &EntryContribution) {
        self.total_hours = (self.total_hours - contribution.total_hours).max(Decimal::ZERO);
        self.overtime_hours =
            (self.overtime_hours - contribution.overtime_hours).max(Decimal::ZERO);
        self.regular_hours = (self.regular_hours - contribution.regular_hours).max(Decimal::ZERO);
    }

    /// Resets every total to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whole minutes in the overall total.
    pub fn total_minutes(&self) -> i64 {
        hours_to_whole_minutes(self.total_hours)
    }

    /// Whole minutes in the overtime total.
    pub fn overtime_minutes(&self) -> i64 {
        hours_to_whole_minutes(self.overtime_hours)
    }

    /// Status line with both totals as `HH:MM`.
    ///
    /// ```
    /// use timecard_engine::models::LedgerTotals;
    /// use rust_decimal::Decimal;
    ///
    /// let totals = LedgerTotals {
    ///     total_hours: Decimal::new(105, 1),
    ///     overtime_hours: Decimal::new(25, 1),
    ///     regular_hours: Decimal::from(8),
    /// };
    /// assert_eq!(totals.summary_line(), "Total Work Hours: 10:30 | Total Overtime: 02:30");
    /// ```
    pub fn summary_line(&self) -> String {
        format!(
            "Total Work Hours: {} | Total Overtime: {}",
            format_minutes(self.total_minutes()),
            format_minutes(self.overtime_minutes())
        )
    }

    /// Returns true if every total is within `tolerance` of `other`.
    pub fn approx_eq(&self, other: &LedgerTotals, tolerance: Decimal) -> bool {
        (self.total_hours - other.total_hours).abs() <= tolerance
            && (self.overtime_hours - other.overtime_hours).abs() <= tolerance
            && (self.regular_hours - other.regular_hours).abs() <= tolerance
    }
}

/// Rounds hours to two decimal places for display.
pub fn hours_for_display(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn hours_to_whole_minutes(hours: Decimal) -> i64 {
    (hours * Decimal::from(60))
        .round_dp(MINUTE_CONVERSION_DP)
        .floor()
        .to_i64()
        .unwrap_or(0)
        .max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::minutes_to_hours;

    fn contribution(regular: i64, overtime: i64) -> EntryContribution {
        EntryContribution {
            regular_hours: minutes_to_hours(regular),
            overtime_hours: minutes_to_hours(overtime),
            total_hours: minutes_to_hours(regular + overtime),
        }
    }

    #[test]
    fn test_default_is_zero() {
        let totals = LedgerTotals::default();
        assert_eq!(totals.total_hours, Decimal::ZERO);
        assert_eq!(totals.overtime_hours, Decimal::ZERO);
        assert_eq!(totals.regular_hours, Decimal::ZERO);
    }

    #[test]
    fn test_add_then_subtract_restores() {
        let mut totals = LedgerTotals::default();
        totals.add(&contribution(480, 60));
        let before = totals;

        let extra = contribution(20, 0);
        totals.add(&extra);
        totals.subtract(&extra);

        assert!(totals.approx_eq(&before, Decimal::new(1, 6)));
    }

    #[test]
    fn test_subtract_floors_each_total() {
        let mut totals = LedgerTotals::default();
        totals.add(&contribution(60, 0));
        totals.subtract(&contribution(120, 30));

        assert_eq!(totals.total_hours, Decimal::ZERO);
        assert_eq!(totals.overtime_hours, Decimal::ZERO);
        assert_eq!(totals.regular_hours, Decimal::ZERO);
    }

    #[test]
    fn test_reset() {
        let mut totals = LedgerTotals::default();
        totals.add(&contribution(480, 120));
        totals.reset();
        assert_eq!(totals, LedgerTotals::default());
    }

    #[test]
    fn test_whole_minutes_survive_thirds() {
        // Three 20-minute contributions are 0.333.. hours each
        let mut totals = LedgerTotals::default();
        for _ in 0..3 {
            totals.add(&contribution(20, 0));
        }
        assert_eq!(totals.total_minutes(), 60);
    }

    #[test]
    fn test_summary_line_truncates_to_minutes() {
        let mut totals = LedgerTotals::default();
        totals.add(&contribution(487, 0));
        assert_eq!(
            totals.summary_line(),
            "Total Work Hours: 08:07 | Total Overtime: 00:00"
        );
    }

    #[test]
    fn test_hours_for_display() {
        assert_eq!(hours_for_display(minutes_to_hours(20)).to_string(), "0.33");
        assert_eq!(hours_for_display(Decimal::new(1005, 3)).to_string(), "1.01");
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut totals = LedgerTotals::default();
        totals.add(&contribution(480, 90));
        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"regular_hours\":\""));

        let deserialized: LedgerTotals = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, totals);
    }
}
