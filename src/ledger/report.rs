//! Plain-text timecard report.
//!
//! The report is a header, a grid table of entries, and a summary of the
//! ledger totals in decimal hours. It only needs the exported rows and the
//! totals, never the ledger itself. The holiday listing is rendered here
//! too.

use chrono::NaiveDateTime;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::holidays::HolidayRegistry;
use crate::models::{EntryView, LedgerTotals, hours_for_display};

const RULE_WIDTH: usize = 80;

#[derive(Tabled)]
struct ReportRow<'a> {
    #[tabled(rename = "Date")]
    date: &'a str,
    #[tabled(rename = "Time In")]
    in_time: &'a str,
    #[tabled(rename = "Time Out")]
    out_time: &'a str,
    #[tabled(rename = "Work Hours")]
    work_hours: &'a str,
    #[tabled(rename = "Overtime")]
    overtime: &'a str,
}

impl<'a> From<&'a EntryView> for ReportRow<'a> {
    fn from(view: &'a EntryView) -> Self {
        Self {
            date: &view.date,
            in_time: &view.in_time,
            out_time: &view.out_time,
            work_hours: &view.work_hours,
            overtime: &view.overtime,
        }
    }
}

/// Renders the timecard report.
///
/// # Example
///
/// ```
/// use timecard_engine::ledger::{LedgerAggregator, report::render_report};
/// use chrono::NaiveDate;
///
/// let mut ledger = LedgerAggregator::default();
/// ledger.add_entry_str("2026-01-15", "08:00 AM", "06:07 PM").unwrap();
///
/// let generated_at = NaiveDate::from_ymd_opt(2026, 1, 31)
///     .unwrap()
///     .and_hms_opt(17, 30, 0)
///     .unwrap();
/// let report = render_report(&ledger.export_rows(), &ledger.totals(), generated_at);
///
/// assert!(report.starts_with("Time Card Report\n"));
/// assert!(report.contains("Generated on: 2026-01-31 17:30:00"));
/// assert!(report.contains("Total Work Hours: 10.00 hours"));
/// assert!(report.contains("Total Overtime Hours: 2.00 hours"));
/// ```
pub fn render_report(
    rows: &[EntryView],
    totals: &LedgerTotals,
    generated_at: NaiveDateTime,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut report = String::new();

    report.push_str("Time Card Report\n");
    report.push_str(&rule);
    report.push('\n');
    report.push_str(&format!(
        "Generated on: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    if rows.is_empty() {
        report.push_str("No records found.\n");
    } else {
        let mut table = Table::new(rows.iter().map(ReportRow::from));
        table.with(Style::ascii());
        report.push_str(&table.to_string());
    }

    report.push_str("\n\nSummary:\n");
    report.push_str(&rule);
    report.push('\n');
    report.push_str(&format!(
        "Total Work Hours: {:.2} hours\n",
        hours_for_display(totals.total_hours)
    ));
    report.push_str(&format!(
        "Total Overtime Hours: {:.2} hours\n",
        hours_for_display(totals.overtime_hours)
    ));

    report
}

/// Renders registered holidays, one per line, in ascending date order.
///
/// Each line is the date, the weekday name and the description if any,
/// separated by two spaces.
///
/// # Example
///
/// ```
/// use timecard_engine::holidays::HolidayRegistry;
/// use timecard_engine::ledger::report::render_holidays;
/// use chrono::NaiveDate;
///
/// let mut registry = HolidayRegistry::new();
/// registry.add_named(NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(), "Christmas Day");
/// registry.add(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap());
///
/// assert_eq!(
///     render_holidays(&registry),
///     "2026-01-26  Monday\n2026-12-25  Friday  Christmas Day\n"
/// );
/// ```
pub fn render_holidays(registry: &HolidayRegistry) -> String {
    if registry.is_empty() {
        return "No holidays registered.\n".to_string();
    }

    let mut listing = String::new();
    for holiday in registry.holidays() {
        listing.push_str(&format!(
            "{}  {}",
            holiday.date.format("%Y-%m-%d"),
            holiday.weekday_name()
        ));
        if let Some(name) = &holiday.name {
            listing.push_str("  ");
            listing.push_str(name);
        }
        listing.push('\n');
    }
    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::minutes_to_hours;
    use chrono::NaiveDate;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 1)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap()
    }

    fn view(date: &str) -> EntryView {
        EntryView {
            date: date.to_string(),
            in_time: "08:00 AM".to_string(),
            out_time: "05:00 PM".to_string(),
            work_hours: "09:00".to_string(),
            overtime: "01:00".to_string(),
        }
    }

    #[test]
    fn test_empty_report() {
        let report = render_report(&[], &LedgerTotals::default(), generated_at());
        assert!(report.contains("No records found."));
        assert!(report.contains("Total Work Hours: 0.00 hours"));
        assert!(report.contains("Total Overtime Hours: 0.00 hours"));
    }

    #[test]
    fn test_header_lines() {
        let report = render_report(&[], &LedgerTotals::default(), generated_at());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Time Card Report");
        assert_eq!(lines[1], "=".repeat(80));
        assert_eq!(lines[2], "Generated on: 2026-02-01 09:05:03");
    }

    #[test]
    fn test_table_has_headers_and_rows() {
        let report = render_report(
            &[view("2026-01-15"), view("2026-01-16")],
            &LedgerTotals::default(),
            generated_at(),
        );
        assert!(report.contains("Time In"));
        assert!(report.contains("Time Out"));
        assert!(report.contains("Work Hours"));
        assert!(report.contains("2026-01-15"));
        assert!(report.contains("2026-01-16"));
        assert!(!report.contains("No records found."));
    }

    #[test]
    fn test_summary_rounds_to_two_places() {
        let totals = LedgerTotals {
            total_hours: minutes_to_hours(500),
            overtime_hours: minutes_to_hours(20),
            regular_hours: minutes_to_hours(480),
        };
        let report = render_report(&[], &totals, generated_at());
        assert!(report.contains("Total Work Hours: 8.33 hours"));
        assert!(report.contains("Total Overtime Hours: 0.33 hours"));
    }

    #[test]
    fn test_holiday_listing_is_sorted_with_weekday_names() {
        let mut registry = HolidayRegistry::new();
        registry.add_named(NaiveDate::from_ymd_opt(2026, 12, 26).unwrap(), "Boxing Day");
        registry.add(NaiveDate::from_ymd_opt(2026, 4, 3).unwrap());
        registry.add_named(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), "New Year's Day");

        let lines: Vec<String> = render_holidays(&registry).lines().map(String::from).collect();
        assert_eq!(
            lines,
            vec![
                "2026-01-01  Thursday  New Year's Day",
                "2026-04-03  Friday",
                "2026-12-26  Saturday  Boxing Day",
            ]
        );
    }

    #[test]
    fn test_empty_holiday_listing() {
        assert_eq!(
            render_holidays(&HolidayRegistry::new()),
            "No holidays registered.\n"
        );
    }
}
