//! Recurring transaction model
//!
//! A recurring transaction is a named income or expense with a cadence and a
//! next-due date. Construction validates every field up front, so a value of
//! this type is always fully valid: the amount carries the sign implied by
//! its kind, and the next-due date is never before the reference day it was
//! built against.

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use super::frequency::Frequency;
use super::money::Money;
use crate::error::{ForecastError, ForecastResult};

/// Parse a strict `YYYY-MM-DD` date
///
/// chrono's `%Y-%m-%d` accepts unpadded fields, a leading sign and
/// surrounding whitespace, so the parsed date must render back to the exact
/// input.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    (date.format("%Y-%m-%d").to_string() == value).then_some(date)
}

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Resolve a kind from input, naming `owner` on failure
    pub fn parse(value: &str, owner: &str) -> ForecastResult<Self> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(ForecastError::InvalidTransactionType {
                name: owner.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Apply this kind's sign to a magnitude
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount.abs(),
            Self::Expense => -amount.abs(),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A periodic income or expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringTransaction {
    name: String,
    kind: TransactionKind,
    amount: Money,
    frequency: Frequency,
    next_date: NaiveDate,
}

impl RecurringTransaction {
    /// Build a transaction from raw input fields
    ///
    /// Fields are checked in the order kind, amount, frequency, date; the
    /// first failure is returned and names the transaction. The sign of the
    /// input amount is ignored. A `next_date` before `today` is rolled
    /// forward by whole recurrence steps.
    pub fn new(
        name: &str,
        kind: &str,
        amount: &str,
        frequency: &str,
        next_date: &str,
        today: NaiveDate,
    ) -> ForecastResult<Self> {
        let kind = TransactionKind::parse(kind, name)?;
        let amount = Money::parse_decimal(amount).map_err(|_| ForecastError::InvalidAmount {
            name: name.to_string(),
            value: amount.to_string(),
        })?;
        let frequency = Frequency::parse(frequency, name)?;
        let next_date = parse_iso_date(next_date).ok_or_else(|| ForecastError::InvalidDate {
            name: name.to_string(),
        })?;

        Self::from_parts(name, kind, amount, frequency, next_date, today)
    }

    /// Build a transaction from already-typed values
    pub fn from_parts(
        name: impl Into<String>,
        kind: TransactionKind,
        amount: Money,
        frequency: Frequency,
        next_date: NaiveDate,
        today: NaiveDate,
    ) -> ForecastResult<Self> {
        let name = name.into();
        let rolled = frequency
            .roll_forward(next_date, today)
            .ok_or_else(|| ForecastError::DateOutOfRange { name: name.clone() })?;

        if rolled != next_date {
            debug!(
                transaction = %name,
                from = %next_date,
                to = %rolled,
                "rolled past-due date forward"
            );
        }

        Ok(Self {
            name,
            kind,
            amount: kind.signed(amount),
            frequency,
            next_date: rolled,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// The signed amount: positive for income, negative for expenses
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn next_date(&self) -> NaiveDate {
        self.next_date
    }

    /// True only when the next occurrence falls exactly on `day`
    pub fn is_due(&self, day: NaiveDate) -> bool {
        self.next_date == day
    }

    /// Move the next-due date forward by one occurrence
    pub fn advance(&mut self) -> ForecastResult<()> {
        self.next_date = self
            .frequency
            .next_after(self.next_date)
            .ok_or_else(|| ForecastError::DateOutOfRange {
                name: self.name.clone(),
            })?;
        Ok(())
    }
}

impl fmt::Display for RecurringTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Type: {}, Amount: {}, Frequency: {}, Next Date: {}",
            self.name,
            self.kind,
            self.amount.to_decimal_string(),
            self.frequency,
            self.next_date.format("%Y-%m-%d")
        )
    }
}
