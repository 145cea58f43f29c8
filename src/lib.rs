//! cash-forecast - day-by-day cash-flow forecasting
//!
//! This library provides the core of the cash-forecast command-line tool.
//! Given a starting balance and a set of recurring income and expense
//! definitions, it steps a calendar forward one day at a time, posts each
//! transaction on the days it falls due and records the running balance in
//! a ledger.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, recurrence rules, recurring transactions, ledger entries
//! - `services`: CSV import and the forecast simulation
//! - `display`: Console table rendering
//! - `export`: CSV ledger export
//! - `cli`: Command-line argument handling
//!
//! # Example
//!
//! ```rust
//! use cash_forecast::models::Money;
//! use cash_forecast::services::Simulation;
//! use chrono::NaiveDate;
//!
//! let csv = "name,frequency,next_date,amount,transaction_type\n\
//!            Rent,monthly,2025-01-01,1200,expense\n";
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//!
//! let mut sim = Simulation::from_reader(csv.as_bytes(), today, 30, Money::from_cents(200000))?;
//! sim.run()?;
//! assert_eq!(sim.balance(), Money::from_cents(80000));
//! # Ok::<(), cash_forecast::ForecastError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

use std::sync::Once;

pub use error::{ForecastError, ForecastResult};

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber, logging to stderr
///
/// `RUST_LOG` takes precedence; otherwise `verbosity` picks the level for
/// this crate (0 = warn, 1 = info, 2 = debug, 3+ = trace).
pub fn init_tracing(verbosity: u8) {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let level = match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("cash_forecast={}", level)));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_tracing_is_idempotent() {
        super::init_tracing(2);
        super::init_tracing(0);
    }
}
