use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::warn;

use cash_forecast::cli::{handle_forecast_command, ForecastArgs};
use cash_forecast::config::{paths::ForecastPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "cash-forecast",
    version,
    about = "Day-by-day cash-flow forecast from recurring income and expenses",
    long_about = "Reads recurring income and expense definitions from a CSV file \
                  (name, frequency, next_date, amount, transaction_type), simulates \
                  the coming days one at a time and prints the resulting ledger \
                  with a running balance."
)]
struct Cli {
    #[command(flatten)]
    forecast: ForecastArgs,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    cash_forecast::init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        println!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // The settings file is optional, so an unresolvable config dir is not fatal
    let settings = match ForecastPaths::new() {
        Ok(paths) => Settings::load_or_default(&paths)?,
        Err(err) => {
            warn!(%err, "no config directory, using default settings");
            Settings::default()
        }
    };

    handle_forecast_command(&settings, cli.forecast)?;

    Ok(())
}
