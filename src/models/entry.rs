//! Ledger entry model
//!
//! One posted event in a forecast: the day it happened, what posted, the
//! signed amount and the balance immediately after it.

use std::fmt;

use chrono::NaiveDate;

use super::money::Money;

/// Name used for the synthetic first entry of every ledger
pub const OPENING_BALANCE: &str = "Opening Balance";

/// An immutable record of one posted event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    date: NaiveDate,
    name: String,
    amount: Money,
    balance: Money,
}

impl LedgerEntry {
    pub fn new(date: NaiveDate, name: impl Into<String>, amount: Money, balance: Money) -> Self {
        Self {
            date,
            name: name.into(),
            amount,
            balance,
        }
    }

    /// The synthetic entry recording the starting balance
    pub fn opening(date: NaiveDate, starting_balance: Money) -> Self {
        Self::new(date, OPENING_BALANCE, starting_balance, starting_balance)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn balance(&self) -> Money {
        self.balance
    }
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:<21}{}\tBalance: {}",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.amount.format_signed("$"),
            self.balance.format_balance("$")
        )
    }
}
