//! Core data models for cash-forecast
//!
//! This module contains the data structures that describe a forecast: money
//! amounts, recurrence rules, recurring transactions and ledger entries.

pub mod entry;
pub mod frequency;
pub mod money;
pub mod recurring;

pub use entry::{LedgerEntry, OPENING_BALANCE};
pub use frequency::{CalendarStep, Frequency};
pub use money::{Money, MoneyParseError};
pub use recurring::{parse_iso_date, RecurringTransaction, TransactionKind};
