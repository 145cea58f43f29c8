//! CSV import service
//!
//! Reads recurring transaction definitions from CSV. The header must carry
//! exactly the required field set (in any order); every row is validated as
//! it is read, and the first bad row aborts the import.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::{ForecastError, ForecastResult};
use crate::models::RecurringTransaction;

/// Fields every input file must provide, no more and no fewer
pub const REQUIRED_INPUT_FIELDS: [&str; 5] =
    ["name", "frequency", "next_date", "amount", "transaction_type"];

/// Column positions of the required fields within one input file
#[derive(Debug, Clone, Copy)]
struct FieldIndex {
    name: usize,
    frequency: usize,
    next_date: usize,
    amount: usize,
    transaction_type: usize,
}

impl FieldIndex {
    fn from_headers(headers: &StringRecord) -> ForecastResult<Self> {
        validate_input_fields(headers)?;

        let position = |field: &str| {
            headers
                .iter()
                .position(|h| h == field)
                .ok_or(ForecastError::InputFields)
        };

        Ok(Self {
            name: position("name")?,
            frequency: position("frequency")?,
            next_date: position("next_date")?,
            amount: position("amount")?,
            transaction_type: position("transaction_type")?,
        })
    }
}

/// Check that a header row names exactly the required fields
pub fn validate_input_fields(headers: &StringRecord) -> ForecastResult<()> {
    let found: BTreeSet<&str> = headers.iter().collect();
    let required: BTreeSet<&str> = REQUIRED_INPUT_FIELDS.into_iter().collect();

    if headers.len() != REQUIRED_INPUT_FIELDS.len() || found != required {
        debug!(headers = ?headers, "input header mismatch");
        return Err(ForecastError::InputFields);
    }
    Ok(())
}

/// Service for loading recurring transactions
pub struct ImportService {
    today: NaiveDate,
}

impl ImportService {
    /// Create an import service that resolves due dates against `today`
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Load transactions from a CSV file on disk
    pub fn import_path(&self, path: &Path) -> ForecastResult<Vec<RecurringTransaction>> {
        let file = File::open(path).map_err(|e| {
            ForecastError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let transactions = self.import_from_reader(file)?;

        info!(
            path = %path.display(),
            count = transactions.len(),
            "imported recurring transactions"
        );
        Ok(transactions)
    }

    /// Load transactions from any CSV source
    pub fn import_from_reader<R: Read>(&self, source: R) -> ForecastResult<Vec<RecurringTransaction>> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);
        self.parse_csv_from_reader(&mut reader)
    }

    /// Parse an open CSV reader into transactions
    pub fn parse_csv_from_reader<R: Read>(
        &self,
        reader: &mut Reader<R>,
    ) -> ForecastResult<Vec<RecurringTransaction>> {
        let headers = reader.headers()?.clone();
        let index = FieldIndex::from_headers(&headers)?;

        let mut transactions = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            // Row numbers are 1-based and count the header line
            transactions.push(self.parse_record(&record, idx + 2, index)?);
        }
        Ok(transactions)
    }

    /// Parse a single CSV record
    fn parse_record(
        &self,
        record: &StringRecord,
        row_number: usize,
        index: FieldIndex,
    ) -> ForecastResult<RecurringTransaction> {
        let field = |i: usize| record.get(i).unwrap_or("");

        let name = field(index.name);
        if name.trim().is_empty() {
            return Err(ForecastError::MissingName { row: row_number });
        }

        let txn = RecurringTransaction::new(
            name,
            field(index.transaction_type),
            field(index.amount),
            field(index.frequency),
            field(index.next_date),
            self.today,
        )?;

        debug!(row = row_number, transaction = %txn, "parsed input row");
        Ok(txn)
    }
}
