//! Path management for cash-forecast
//!
//! Resolves where the optional settings file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `CASH_FORECAST_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/cash-forecast` or `~/.config/cash-forecast`
//! 3. Windows: `%APPDATA%\cash-forecast`

use std::path::PathBuf;

use crate::error::ForecastError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "CASH_FORECAST_CONFIG_DIR";

/// Manages all paths used by cash-forecast
#[derive(Debug, Clone)]
pub struct ForecastPaths {
    base_dir: PathBuf,
}

impl ForecastPaths {
    /// Create a new ForecastPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, ForecastError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ForecastPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ForecastError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => std::env::var("HOME")
            .map(|home| PathBuf::from(home).join(".config"))
            .map_err(|_| ForecastError::Config("Could not determine HOME directory".into()))?,
    };
    Ok(config_base.join("cash-forecast"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ForecastError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ForecastError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("cash-forecast"))
}
