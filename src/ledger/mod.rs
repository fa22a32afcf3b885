//! The shift ledger and its file formats.
//!
//! [`LedgerAggregator`] owns the ordered entries and running totals. The
//! [`import`], [`export`] and [`report`] modules are the shell-facing
//! adapters: they turn CSV files into rows for
//! [`LedgerAggregator::bulk_load`] and turn
//! [`LedgerAggregator::export_rows`] and [`LedgerAggregator::totals`] into
//! CSV files and text reports.

mod aggregator;
pub mod export;
pub mod import;
pub mod report;

pub use aggregator::{BulkLoadReport, LedgerAggregator, RowFailure};
