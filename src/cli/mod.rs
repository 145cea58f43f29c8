//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod forecast;

pub use forecast::{handle_forecast_command, ForecastArgs};
