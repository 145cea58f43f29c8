//! Forecast CLI command
//!
//! Validates the command-line preconditions, runs the simulation, prints the
//! ledger table and optionally exports the ledger.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::info;

use crate::config::settings::Settings;
use crate::display::format_ledger_table;
use crate::error::{ForecastError, ForecastResult};
use crate::export::export_ledger_to_path;
use crate::models::{parse_iso_date, Money};
use crate::services::Simulation;

/// Arguments for a forecast run
#[derive(Args, Debug, Clone)]
pub struct ForecastArgs {
    /// Path to the input CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Number of days to forecast (default: 30)
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Starting balance
    #[arg(
        short = 'b',
        long,
        default_value = "0.00",
        allow_negative_numbers = true,
        value_parser = parse_balance
    )]
    pub start_balance: Money,

    /// Optional path to export results as CSV
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// First day of the forecast, YYYY-MM-DD (defaults to the local date)
    #[arg(long, value_name = "DATE", value_parser = parse_today)]
    pub today: Option<NaiveDate>,
}

fn parse_balance(s: &str) -> Result<Money, String> {
    Money::parse_decimal(s).map_err(|e| e.to_string())
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    parse_iso_date(s).ok_or_else(|| format!("'{}' is not a date in YYYY-MM-DD format", s))
}

/// Handle a forecast run
pub fn handle_forecast_command(settings: &Settings, args: ForecastArgs) -> ForecastResult<()> {
    if !args.input.is_file() {
        return Err(ForecastError::InputNotFound(args.input));
    }

    let days = args.days.unwrap_or(settings.default_days);
    if days <= 0 {
        return Err(ForecastError::InvalidHorizon(days));
    }

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    info!(input = %args.input.display(), %today, days, "starting forecast");

    let mut simulation = Simulation::from_csv_path(&args.input, today, days, args.start_balance)?;
    simulation.run()?;

    print!(
        "{}",
        format_ledger_table(
            simulation.entries(),
            &settings.currency_symbol,
            &settings.table
        )
    );

    if let Some(path) = args.export {
        export_ledger_to_path(simulation.entries(), &path)?;
        println!("Ledger exported to: {}", path.display());
    }

    Ok(())
}
