mod commands;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use yearcal_core::config::YearCalConfig;
use yearcal_core::constants::MONTHS;
use yearcal_core::event::EventColor;
use yearcal_core::store::EventStore;

#[derive(Parser)]
#[command(name = "yearcal")]
#[command(about = "A whole year of date-ranged events in your terminal")]
struct Cli {
    /// Calendar file to use instead of the configured data_file
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every month of a year, one row per month
    Year {
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Show the lanes of a single month
    Month {
        /// Month number (1-12) or name (e.g. "apr")
        #[arg(value_parser = parse_month)]
        month: u32,

        #[arg(short, long)]
        year: Option<i32>,

        /// Print the raw layout as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every event touching a day, including hidden ones
    Day {
        /// Date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },
    /// List all events
    List,
    /// Create a new event
    Add {
        title: String,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date)]
        start: NaiveDate,

        /// End date (YYYY-MM-DD), defaults to the start date
        #[arg(short, long, value_parser = parse_date)]
        end: Option<NaiveDate>,

        #[arg(short, long, default_value = "red")]
        color: EventColor,
    },
    /// Change fields of an existing event
    Edit {
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long, value_parser = parse_date)]
        start: Option<NaiveDate>,

        #[arg(short, long, value_parser = parse_date)]
        end: Option<NaiveDate>,

        #[arg(short, long)]
        color: Option<EventColor>,
    },
    /// Delete an event
    Delete { id: i64 },
    /// Show or change settings in ~/.config/yearcal/config.toml
    Config {
        /// Default year for views
        #[arg(long)]
        year: Option<i32>,

        /// Calendar file to use from now on
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
    /// Replace all events with the contents of a JSON file
    Import { path: PathBuf },
    /// Write all events to a JSON file
    Export { path: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let config = YearCalConfig::load().context("Failed to load configuration")?;
    let path = cli.file.unwrap_or_else(|| config.data_path());
    tracing::debug!(path = %path.display(), "using calendar file");
    let mut store = EventStore::open(&path)
        .with_context(|| format!("Failed to read calendar file {}", path.display()))?;

    match cli.command {
        Commands::Year { year } => {
            commands::year::run(&store, year.unwrap_or_else(|| config.default_year()))
        }
        Commands::Month { month, year, json } => commands::month::run(
            &store,
            month,
            year.unwrap_or_else(|| config.default_year()),
            json,
        ),
        Commands::Day { date } => commands::day::run(&store, date),
        Commands::List => commands::list::run(&store),
        Commands::Add {
            title,
            start,
            end,
            color,
        } => commands::add::run(&mut store, title, start, end, color),
        Commands::Edit {
            id,
            title,
            start,
            end,
            color,
        } => commands::edit::run(
            &mut store,
            id,
            commands::edit::EventChanges {
                title,
                start,
                end,
                color,
            },
        ),
        Commands::Delete { id } => commands::delete::run(&mut store, id),
        Commands::Config { year, data_file } => {
            commands::config::run(config, &store, year, data_file)
        }
        Commands::Import { path } => commands::transfer::import(&mut store, &path),
        Commands::Export { path } => commands::transfer::export(&store, &path),
    }
}

/// Parse YYYY-MM-DD
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

/// Parse a month number (1-12) or name into a 0-based month index.
fn parse_month(s: &str) -> Result<u32, String> {
    let s = s.trim();

    if let Ok(n) = s.parse::<u32>() {
        return match n {
            1..=12 => Ok(n - 1),
            _ => Err(format!("Month must be between 1 and 12, got {}", n)),
        };
    }

    let unknown = || format!("Unknown month '{}'. Use 1-12 or a name like \"apr\"", s);
    if s.len() < 3 || !s.is_ascii() {
        return Err(unknown());
    }

    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(&s[..3]))
        .map(|i| i as u32)
        .ok_or_else(unknown)
}
