//! Display formatting for terminal output
//!
//! Provides utilities for formatting the forecast ledger for terminal display.

pub mod ledger;

pub use ledger::format_ledger_table;
