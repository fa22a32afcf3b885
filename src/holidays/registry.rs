//! In-memory holiday registry.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::HolidayCalendar;

/// A registered holiday.
///
/// # Example
///
/// ```
/// use timecard_engine::holidays::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
///     name: Some("Christmas Day".to_string()),
/// };
/// assert_eq!(holiday.weekday_name(), "Friday");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The holiday date.
    pub date: NaiveDate,
    /// Optional description, e.g. "Christmas Day".
    #[serde(default)]
    pub name: Option<String>,
}

impl Holiday {
    /// The full English weekday name of the holiday, e.g. "Monday".
    pub fn weekday_name(&self) -> String {
        self.date.format("%A").to_string()
    }
}

/// A set of holiday dates.
///
/// Dates are unique and always listed in ascending order. Every operation
/// is total: adding twice and removing an absent date are both no-ops.
///
/// # Example
///
/// ```
/// use timecard_engine::holidays::HolidayRegistry;
/// use chrono::NaiveDate;
///
/// let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let christmas = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
///
/// let mut registry = HolidayRegistry::new();
/// registry.add(christmas);
/// registry.add(new_year);
/// registry.add(christmas);
///
/// assert!(registry.is_holiday(christmas));
/// assert_eq!(registry.list(), vec![new_year, christmas]);
///
/// registry.remove(christmas);
/// assert!(!registry.is_holiday(christmas));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayRegistry {
    holidays: BTreeMap<NaiveDate, Option<String>>,
}

impl HolidayRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday date. Re-adding a date keeps its existing name.
    pub fn add(&mut self, date: NaiveDate) {
        self.holidays.entry(date).or_insert(None);
    }

    /// Adds a holiday date with a description, replacing any previous one.
    pub fn add_named(&mut self, date: NaiveDate, name: impl Into<String>) {
        self.holidays.insert(date, Some(name.into()));
    }

    /// Removes a holiday date if present.
    pub fn remove(&mut self, date: NaiveDate) {
        self.holidays.remove(&date);
    }

    /// Returns true if `date` is registered.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// All holiday dates in ascending order.
    pub fn list(&self) -> Vec<NaiveDate> {
        self.holidays.keys().copied().collect()
    }

    /// All holidays with their names, in ascending date order.
    pub fn holidays(&self) -> impl Iterator<Item = Holiday> + '_ {
        self.holidays.iter().map(|(date, name)| Holiday {
            date: *date,
            name: name.clone(),
        })
    }

    /// Returns the name registered for `date`, if any.
    pub fn name_of(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date).and_then(|name| name.as_deref())
    }

    /// Number of registered holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true when no holidays are registered.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl HolidayCalendar for HolidayRegistry {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        HolidayRegistry::is_holiday(self, date)
    }
}

impl FromIterator<Holiday> for HolidayRegistry {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        let mut registry = Self::new();
        for holiday in iter {
            match holiday.name {
                Some(name) => registry.add_named(holiday.date, name),
                None => registry.add(holiday.date),
            }
        }
        registry
    }
}

impl FromIterator<NaiveDate> for HolidayRegistry {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        let mut registry = Self::new();
        for date in iter {
            registry.add(date);
        }
        registry
    }
}
