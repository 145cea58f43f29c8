//! CSV export functionality
//!
//! Writes a forecast ledger as `date,name,amount,balance` rows with ISO
//! dates and two-decimal amounts, and reads such a file back.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ForecastError, ForecastResult};
use crate::models::{LedgerEntry, Money};

/// One exported ledger row
#[derive(Debug, Serialize, Deserialize)]
struct LedgerRow {
    date: NaiveDate,
    name: String,
    amount: String,
    balance: String,
}

impl From<&LedgerEntry> for LedgerRow {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            date: entry.date(),
            name: entry.name().to_string(),
            amount: entry.amount().to_decimal_string(),
            balance: entry.balance().to_decimal_string(),
        }
    }
}

impl LedgerRow {
    fn into_entry(self) -> ForecastResult<LedgerEntry> {
        let parse = |value: &str| {
            Money::parse_decimal(value)
                .map_err(|e| ForecastError::Import(format!("Invalid ledger amount: {}", e)))
        };
        let amount = parse(&self.amount)?;
        let balance = parse(&self.balance)?;
        Ok(LedgerEntry::new(self.date, self.name, amount, balance))
    }
}

/// Export ledger entries to CSV
pub fn export_ledger_csv<W: Write>(entries: &[LedgerEntry], writer: W) -> ForecastResult<()> {
    if entries.is_empty() {
        warn!("refusing to export an empty ledger");
        return Err(ForecastError::EmptyLedger);
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in entries {
        csv_writer
            .serialize(LedgerRow::from(entry))
            .map_err(|e| ForecastError::Export(e.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| ForecastError::Export(e.to_string()))?;

    Ok(())
}

/// Export ledger entries to a CSV file, creating or truncating it
pub fn export_ledger_to_path(entries: &[LedgerEntry], path: &Path) -> ForecastResult<()> {
    if entries.is_empty() {
        return Err(ForecastError::EmptyLedger);
    }

    let file = File::create(path).map_err(|e| {
        ForecastError::Export(format!(
            "Unable to write to the export location {}: {}",
            path.display(),
            e
        ))
    })?;
    export_ledger_csv(entries, BufWriter::new(file))?;

    info!(path = %path.display(), rows = entries.len(), "exported ledger");
    Ok(())
}

/// Read a ledger previously written by [`export_ledger_csv`]
pub fn read_ledger_csv<R: Read>(source: R) -> ForecastResult<Vec<LedgerEntry>> {
    let mut reader = csv::Reader::from_reader(source);
    reader
        .deserialize::<LedgerRow>()
        .map(|row| row?.into_entry())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_ledger() -> Vec<LedgerEntry> {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        vec![
            LedgerEntry::opening(day, Money::from_cents(100000)),
            LedgerEntry::new(day, "Rent, downtown", Money::from_cents(-120000), Money::from_cents(-20000)),
            LedgerEntry::new(
                NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
                "Paycheck",
                Money::from_cents(250005),
                Money::from_cents(230005),
            ),
        ]
    }

    #[test]
    fn test_export_ledger_csv() {
        let mut output = Vec::new();
        export_ledger_csv(&sample_ledger(), &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines[0], "date,name,amount,balance");
        assert_eq!(lines[1], "2025-01-01,Opening Balance,1000.00,1000.00");
        assert_eq!(lines[2], "2025-01-01,\"Rent, downtown\",-1200.00,-200.00");
        assert_eq!(lines[3], "2025-01-03,Paycheck,2500.05,2300.05");
    }

    #[test]
    fn test_export_then_read_back() {
        let ledger = sample_ledger();
        let mut output = Vec::new();
        export_ledger_csv(&ledger, &mut output).unwrap();

        let read_back = read_ledger_csv(output.as_slice()).unwrap();
        assert_eq!(read_back, ledger);
    }

    #[test]
    fn test_empty_ledger_rejected() {
        let mut output = Vec::new();
        assert!(matches!(
            export_ledger_csv(&[], &mut output),
            Err(ForecastError::EmptyLedger)
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn test_export_to_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        export_ledger_to_path(&sample_ledger(), &path).unwrap();

        let file = File::open(&path).unwrap();
        assert_eq!(read_ledger_csv(file).unwrap().len(), 3);
    }

    #[test]
    fn test_export_to_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("ledger.csv");

        let err = export_ledger_to_path(&sample_ledger(), &path).unwrap_err();
        assert!(matches!(err, ForecastError::Export(_)));
        assert!(err.to_string().contains("Unable to write to the export location"));
    }

    #[test]
    fn test_empty_ledger_creates_no_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        assert!(matches!(
            export_ledger_to_path(&[], &path),
            Err(ForecastError::EmptyLedger)
        ));
        assert!(!path.exists());
    }
}
