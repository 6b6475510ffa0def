//! `slots` CLI — bookable availability from free/busy data on the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Free intervals between busy periods (busy JSON on stdin)
//! slots --config calendar.json free --start 2026-03-02T00:00:00+01:00 --end 2026-03-09T00:00:00+01:00
//!
//! # Dates with room for a booking, busy list read from a file
//! slots --config calendar.json days -i busy.json --start ... --end ...
//!
//! # Bookable 15-minute slot starts
//! slots --config calendar.json slots -i freebusy-response.json --start ... --end ...
//!
//! # Resolved opening window of one date
//! slots --config calendar.json window --date 2026-03-02
//! ```
//!
//! Logs go to stderr; `RUST_LOG` overrides the level set by `-v`.

mod logging;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use slot_engine::interval::parse_instant;
use slot_engine::{AvailabilityMode, CalendarConfig, ConfigSource, Session, SlotError};
use std::io::{self, Read};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Bookable days and time slots from calendar free/busy data"
)]
struct Cli {
    /// Calendar configuration document (timezone, calendar id, opening hours)
    #[arg(short, long)]
    config: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RangeArgs {
    /// Range start (RFC 3339, or local time in the calendar timezone)
    #[arg(long)]
    start: String,
    /// Range end (RFC 3339, or local time in the calendar timezone)
    #[arg(long)]
    end: String,
    /// Busy JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the free intervals of the range
    Free(RangeArgs),
    /// Print the dates that have room for at least one booking
    Days(RangeArgs),
    /// Print the bookable slot start times
    Slots(RangeArgs),
    /// Print the resolved opening window of one date
    Window {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
}

/// Configuration document read from disk.
struct FileSource(String);

impl ConfigSource for FileSource {
    fn load(&self) -> slot_engine::error::Result<CalendarConfig> {
        let json = std::fs::read_to_string(&self.0).map_err(|e| {
            SlotError::ConfigSource(format!("failed to read {}: {}", self.0, e))
        })?;
        CalendarConfig::from_json(&json)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose).context("Failed to initialize logging")?;

    let session = Session::new(FileSource(cli.config.clone()));
    let config = session
        .config()
        .with_context(|| format!("Failed to load configuration from {}", cli.config))?;

    match cli.command {
        Commands::Free(args) => {
            let (busy, start, end) = read_request(&config, &args)?;
            let free = slot_engine::free_intervals(&busy, start, end);
            write_json(args.output.as_deref(), &serde_json::to_value(&free)?)?;
        }
        Commands::Days(args) => {
            run_availability(&config, &args, AvailabilityMode::Days)?;
        }
        Commands::Slots(args) => {
            run_availability(&config, &args, AvailabilityMode::Slots)?;
        }
        Commands::Window { date } => {
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .with_context(|| format!("Invalid date: {}", date))?;
            let window = config.hours().window(date, 0);
            write_json(None, &serde_json::to_value(window)?)?;
        }
    }

    Ok(())
}

fn run_availability(config: &CalendarConfig, args: &RangeArgs, mode: AvailabilityMode) -> Result<()> {
    let (busy, start, end) = read_request(config, args)?;
    let result = slot_engine::compute_availability(config, &busy, start, end, mode);
    info!(?mode, %start, %end, "Computed availability");
    write_json(args.output.as_deref(), &serde_json::to_value(&result)?)
}

fn read_request(
    config: &CalendarConfig,
    args: &RangeArgs,
) -> Result<(
    Vec<slot_engine::Interval>,
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::Utc>,
)> {
    let start = parse_instant(&args.start, &config.timezone)
        .with_context(|| format!("Invalid --start: {}", args.start))?;
    let end = parse_instant(&args.end, &config.timezone)
        .with_context(|| format!("Invalid --end: {}", args.end))?;
    let json = read_input(args.input.as_deref())?;
    let busy = slot_engine::parse_busy_json(&json, &config.calendar_id, &config.timezone)
        .context("Failed to parse busy intervals")?;
    Ok((busy, start, end))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_json(path: Option<&str>, value: &Value) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            std::fs::write(path, pretty).with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", pretty);
        }
    }
    Ok(())
}
