//! Timecard Engine
//!
//! This crate turns daily clock-in/clock-out times into worked, regular and
//! overtime minutes (8-hour standard day, quarter-hour overtime rounding,
//! a full ninth hour before weekday overtime counts, and all-overtime
//! weekends and holidays), and keeps a ledger of entries with running
//! totals that can be imported, exported and reported.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod holidays;
pub mod ledger;
pub mod models;
