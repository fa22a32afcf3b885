use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timecard_engine::calculation::{compute_shift, format_minutes};
use timecard_engine::config::ConfigLoader;
use timecard_engine::ledger::{BulkLoadReport, LedgerAggregator, export, import, report};

#[derive(Parser)]
#[command(name = "timecard")]
#[command(about = "Compute worked hours and overtime from daily clock times")]
struct Cli {
    /// YAML file with the overtime policy and holidays
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct HolidayArgs {
    /// Extra holiday date (YYYY-MM-DD); may be repeated
    #[arg(long = "holiday", value_name = "DATE")]
    holidays: Vec<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a single shift
    Compute {
        /// Shift date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Clock-in time, e.g. "08:30 AM"
        #[arg(long = "in")]
        in_time: String,
        /// Clock-out time, e.g. "05:00 PM"
        #[arg(long = "out")]
        out_time: String,
        #[command(flatten)]
        holidays: HolidayArgs,
    },
    /// Import a timecard CSV and print the report
    Report {
        /// CSV file with Date, In Time and Out Time columns
        input: PathBuf,
        /// Print entries and totals as JSON instead of a text report
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        holidays: HolidayArgs,
    },
    /// Import a timecard CSV and write it back with computed columns
    Convert {
        /// CSV file with Date, In Time and Out Time columns
        input: PathBuf,
        /// Destination CSV file
        output: PathBuf,
        #[command(flatten)]
        holidays: HolidayArgs,
    },
    /// List the registered holidays with their weekday names
    Holidays {
        #[command(flatten)]
        holidays: HolidayArgs,
    },
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "timecard_engine=info,timecard=info".into()),
    );

    // stdout carries the report; logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_ledger(config: Option<&PathBuf>, holidays: &HolidayArgs) -> Result<LedgerAggregator> {
    let loader = match config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConfigLoader::default(),
    };

    let mut ledger = loader.ledger();
    for date in &holidays.holidays {
        ledger.holidays_mut().add(*date);
    }
    Ok(ledger)
}

fn load_csv(ledger: &mut LedgerAggregator, input: &PathBuf) -> Result<BulkLoadReport> {
    let rows = import::read_rows_from_path(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let result = ledger.bulk_load(rows);

    if !result.is_complete() {
        eprintln!(
            "{} of {} rows skipped",
            result.failures.len(),
            result.loaded + result.failures.len()
        );
    }
    Ok(result)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Compute {
            date,
            in_time,
            out_time,
            holidays,
        } => {
            let ledger = build_ledger(cli.config.as_ref(), &holidays)?;
            let result = compute_shift(
                &in_time,
                &out_time,
                date,
                ledger.holidays(),
                ledger.policy(),
            )?;
            println!("Day type:   {}", result.day_type);
            println!("Work Hours: {}", format_minutes(result.worked_minutes));
            println!("Regular:    {}", format_minutes(result.regular_minutes));
            println!("Overtime:   {}", format_minutes(result.overtime_minutes));
        }
        Commands::Report {
            input,
            json,
            holidays,
        } => {
            let mut ledger = build_ledger(cli.config.as_ref(), &holidays)?;
            load_csv(&mut ledger, &input)?;

            if json {
                let snapshot = serde_json::json!({
                    "entries": ledger.entries(),
                    "totals": ledger.totals(),
                });
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print!(
                    "{}",
                    report::render_report(
                        &ledger.export_rows(),
                        &ledger.totals(),
                        Local::now().naive_local(),
                    )
                );
                println!("{}", ledger.totals().summary_line());
            }
        }
        Commands::Convert {
            input,
            output,
            holidays,
        } => {
            let mut ledger = build_ledger(cli.config.as_ref(), &holidays)?;
            load_csv(&mut ledger, &input)?;
            export::write_csv_to_path(&output, &ledger.export_rows())
                .with_context(|| format!("writing {}", output.display()))?;
            println!("{}", ledger.totals().summary_line());
        }
        Commands::Holidays { holidays } => {
            let ledger = build_ledger(cli.config.as_ref(), &holidays)?;
            print!("{}", report::render_holidays(ledger.holidays()));
        }
    }

    Ok(())
}
