//! Export module for cash-forecast
//!
//! Writes the finished ledger as CSV (spreadsheet-compatible) and reads an
//! exported ledger back.

pub mod csv;

pub use self::csv::{export_ledger_csv, export_ledger_to_path, read_ledger_csv};
