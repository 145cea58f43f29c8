//! Forecast simulation
//!
//! Walks a calendar one day at a time from the reference day through the end
//! of the horizon (inclusive), posting every transaction that falls due on
//! each day to a running balance and recording the result in an append-only
//! ledger.
//!
//! Due checks compare dates exactly, so the loop must never skip a day: an
//! occurrence whose date is stepped over would never post.

use std::io::Read;
use std::path::Path;

use chrono::{Days, NaiveDate};
use tracing::{debug, info};

use super::import::ImportService;
use crate::error::{ForecastError, ForecastResult};
use crate::models::{LedgerEntry, Money, RecurringTransaction};

/// A day-by-day cash-flow simulation and the ledger it produces
#[derive(Debug, Clone)]
pub struct Simulation {
    today: NaiveDate,
    current_day: NaiveDate,
    end_day: NaiveDate,
    balance: Money,
    transactions: Vec<RecurringTransaction>,
    entries: Vec<LedgerEntry>,
}

impl Simulation {
    /// Set up a simulation over `days` days starting at `today`
    ///
    /// Records the opening balance as the first ledger entry. Transactions
    /// keep their given order, which decides posting order within a day.
    pub fn new(
        today: NaiveDate,
        days: i64,
        starting_balance: Money,
        transactions: Vec<RecurringTransaction>,
    ) -> ForecastResult<Self> {
        if days <= 0 {
            return Err(ForecastError::InvalidHorizon(days));
        }
        let end_day = today
            .checked_add_days(Days::new(days.unsigned_abs()))
            .filter(|end| end.succ_opt().is_some())
            .ok_or(ForecastError::HorizonOutOfRange(days))?;

        Ok(Self {
            today,
            current_day: today,
            end_day,
            balance: starting_balance,
            transactions,
            entries: vec![LedgerEntry::opening(today, starting_balance)],
        })
    }

    /// Import transactions from a CSV file and set up a simulation
    pub fn from_csv_path(
        path: &Path,
        today: NaiveDate,
        days: i64,
        starting_balance: Money,
    ) -> ForecastResult<Self> {
        let transactions = ImportService::new(today).import_path(path)?;
        Self::new(today, days, starting_balance, transactions)
    }

    /// Import transactions from a CSV source and set up a simulation
    pub fn from_reader<R: Read>(
        source: R,
        today: NaiveDate,
        days: i64,
        starting_balance: Money,
    ) -> ForecastResult<Self> {
        let transactions = ImportService::new(today).import_from_reader(source)?;
        Self::new(today, days, starting_balance, transactions)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn current_day(&self) -> NaiveDate {
        self.current_day
    }

    pub fn end_day(&self) -> NaiveDate {
        self.end_day
    }

    /// The running balance after everything posted so far
    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn transactions(&self) -> &[RecurringTransaction] {
        &self.transactions
    }

    /// The ledger so far, opening balance first
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<LedgerEntry> {
        self.entries
    }

    /// True while the current day is within the horizon
    pub fn is_active(&self) -> bool {
        self.current_day <= self.end_day
    }

    /// Post everything due on the current day, then move to the next day
    ///
    /// Returns the number of entries posted. Stepping a finished simulation
    /// does nothing.
    pub fn step(&mut self) -> ForecastResult<usize> {
        if !self.is_active() {
            return Ok(0);
        }

        let day = self.current_day;
        let mut posted = 0;

        for txn in self.transactions.iter_mut() {
            if !txn.is_due(day) {
                continue;
            }

            self.balance = self
                .balance
                .checked_add(txn.amount())
                .ok_or_else(|| ForecastError::BalanceOutOfRange {
                    name: txn.name().to_string(),
                })?;
            let entry = LedgerEntry::new(day, txn.name(), txn.amount(), self.balance);
            debug!(entry = %entry, "posted");
            self.entries.push(entry);
            txn.advance()?;
            posted += 1;
        }

        self.current_day = day
            .succ_opt()
            .ok_or(ForecastError::HorizonOutOfRange((self.end_day - self.today).num_days()))?;

        Ok(posted)
    }

    /// Run the simulation through the last day of the horizon
    pub fn run(&mut self) -> ForecastResult<()> {
        while self.is_active() {
            self.step()?;
        }

        info!(
            from = %self.today,
            to = %self.end_day,
            entries = self.entries.len(),
            closing_balance = %self.balance,
            "forecast complete"
        );
        Ok(())
    }
}
