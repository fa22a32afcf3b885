//! Performance benchmarks for the Timecard Engine.
//!
//! Covers the hot paths of the `timecard` binary:
//! - Single shift computation from clock strings
//! - Adding and deleting ledger entries
//! - Bulk loading timecards of increasing size
//! - CSV import of a month of rows
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use timecard_engine::calculation::{OvertimePolicy, compute_shift, format_date};
use timecard_engine::holidays::HolidayRegistry;
use timecard_engine::ledger::{LedgerAggregator, import};
use timecard_engine::models::ShiftRow;

const SHIFT_PATTERNS: [(&str, &str); 4] = [
    ("09:00 AM", "05:00 PM"),
    ("08:00 AM", "06:07 PM"),
    ("10:00 PM", "06:00 AM"),
    ("07:30 AM", "04:15 PM"),
];

/// Creates `count` rows on consecutive days starting Thursday 2026-01-01.
fn create_rows(count: usize) -> Vec<ShiftRow> {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let (in_time, out_time) = SHIFT_PATTERNS[i % SHIFT_PATTERNS.len()];
            let date = start + Duration::days(i as i64);
            ShiftRow::new(format_date(date), in_time, out_time)
        })
        .collect()
}

fn create_holidays() -> HolidayRegistry {
    ["2026-01-01", "2026-01-26", "2026-04-03", "2026-12-25"]
        .iter()
        .map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap())
        .collect()
}

/// Benchmark: Single shift computation.
fn bench_single_shift(c: &mut Criterion) {
    let holidays = create_holidays();
    let policy = OvertimePolicy::default();
    let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

    c.bench_function("single_shift", |b| {
        b.iter(|| {
            black_box(compute_shift(
                black_box("08:00 AM"),
                black_box("06:07 PM"),
                date,
                &holidays,
                &policy,
            ))
        })
    });
}

/// Benchmark: Add one entry to a populated ledger and delete it again.
fn bench_add_delete(c: &mut Criterion) {
    let mut ledger = LedgerAggregator::default().with_holidays(create_holidays());
    ledger.bulk_load(create_rows(100));
    let date = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();

    c.bench_function("add_delete_entry", |b| {
        b.iter(|| {
            let id = ledger.add_entry(date, "09:00 AM", "12:10 PM").unwrap().id;
            black_box(ledger.delete_entries(&HashSet::from([id])))
        })
    });
}

/// Benchmark: Bulk loads of various sizes to understand scaling behavior.
fn bench_bulk_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_load");

    for row_count in [14, 100, 1000].iter() {
        let rows = create_rows(*row_count);

        group.throughput(Throughput::Elements(*row_count as u64));
        group.bench_with_input(BenchmarkId::new("rows", row_count), &rows, |b, rows| {
            b.iter(|| {
                let mut ledger = LedgerAggregator::default().with_holidays(create_holidays());
                black_box(ledger.bulk_load(rows.iter().cloned()))
            })
        });
    }

    group.finish();
}

/// Benchmark: Parse a month of CSV rows.
fn bench_csv_import(c: &mut Criterion) {
    let mut csv = String::from("Date,In Time,Out Time\n");
    for row in create_rows(31) {
        csv.push_str(&format!("{},{},{}\n", row.date, row.in_time, row.out_time));
    }

    c.bench_function("csv_import_31_rows", |b| {
        b.iter(|| black_box(import::read_rows(black_box(csv.as_bytes())).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_single_shift,
    bench_add_delete,
    bench_bulk_load,
    bench_csv_import,
);
criterion_main!(benches);
