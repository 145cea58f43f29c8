//! Configuration module for cash-forecast
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Optional user settings (default horizon, currency symbol, table layout)

pub mod paths;
pub mod settings;

pub use paths::ForecastPaths;
pub use settings::{Settings, TableSettings};
