//! User settings for cash-forecast
//!
//! Optional preferences read from `config.json`: the default horizon, the
//! currency symbol and the table layout. Every field has a default, so a
//! missing file or a partial file both work.

use serde::{Deserialize, Serialize};

use super::paths::ForecastPaths;
use crate::error::ForecastError;

/// Layout of the console ledger table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSettings {
    /// Padding added to the widest value of each column
    #[serde(default = "default_column_buffer")]
    pub column_buffer: usize,

    /// Column width used when the ledger has no entries
    #[serde(default = "default_min_column_width")]
    pub min_column_width: usize,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            column_buffer: default_column_buffer(),
            min_column_width: default_min_column_width(),
        }
    }
}

/// User settings for cash-forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Horizon used when `--days` is not given
    #[serde(default = "default_days")]
    pub default_days: i64,

    /// Currency symbol for console output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    #[serde(default)]
    pub table: TableSettings,
}

fn default_days() -> i64 {
    30
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_column_buffer() -> usize {
    4
}

fn default_min_column_width() -> usize {
    12
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_days: default_days(),
            currency_symbol: default_currency(),
            table: TableSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &ForecastPaths) -> Result<Self, ForecastError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ForecastError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ForecastError::Config(format!("Failed to parse settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_days, 30);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.table.column_buffer, 4);
        assert_eq!(settings.table.min_column_width, 12);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ForecastPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.default_days, 30);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ForecastPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"default_days": 90, "table": {"column_buffer": 2}}"#,
        )
        .unwrap();

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.default_days, 90);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.table.column_buffer, 2);
        assert_eq!(settings.table.min_column_width, 12);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ForecastPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(matches!(
            Settings::load_or_default(&paths),
            Err(ForecastError::Config(_))
        ));
    }
}
