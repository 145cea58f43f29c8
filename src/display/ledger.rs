//! Ledger table formatting
//!
//! Renders a forecast ledger as a fixed-width table. Column widths follow
//! the widest rendered value in each column plus a buffer, so the output
//! is meant for reading, not parsing.

use crate::config::TableSettings;
use crate::models::LedgerEntry;

/// Width of an ISO date ("YYYY-MM-DD")
const DATE_WIDTH: usize = 10;

/// One ledger row, rendered to strings
struct RenderedRow {
    date: String,
    name: String,
    amount: String,
    balance: String,
}

impl RenderedRow {
    fn from_entry(entry: &LedgerEntry, symbol: &str) -> Self {
        Self {
            date: entry.date().format("%Y-%m-%d").to_string(),
            name: entry.name().to_string(),
            amount: entry.amount().format_signed(symbol),
            balance: entry.balance().format_balance(symbol),
        }
    }
}

/// Widest value in a column plus the buffer, or the minimum if there are no rows
fn column_width<F>(rows: &[RenderedRow], layout: &TableSettings, value: F) -> usize
where
    F: Fn(&RenderedRow) -> &str,
{
    rows.iter()
        .map(|row| value(row).chars().count())
        .max()
        .unwrap_or(layout.min_column_width)
        + layout.column_buffer
}

/// Format a ledger as a table: header, separator, one row per entry
pub fn format_ledger_table(entries: &[LedgerEntry], symbol: &str, layout: &TableSettings) -> String {
    let rows: Vec<RenderedRow> = entries
        .iter()
        .map(|entry| RenderedRow::from_entry(entry, symbol))
        .collect();

    let date_width = DATE_WIDTH + layout.column_buffer;
    let name_width = column_width(&rows, layout, |r| r.name.as_str());
    let amount_width = column_width(&rows, layout, |r| r.amount.as_str());
    let balance_width = column_width(&rows, layout, |r| r.balance.as_str());

    let header = format!(
        "{:<date_width$}{:<name_width$}{:>amount_width$}{:>balance_width$}",
        "Date", "Name", "Amount", "Balance"
    );

    let mut output = String::new();
    output.push_str(&header);
    output.push('\n');
    output.push_str(&"-".repeat(header.chars().count()));
    output.push('\n');

    for row in &rows {
        output.push_str(&format!(
            "{:<date_width$}{:<name_width$}{:>amount_width$}{:>balance_width$}\n",
            row.date, row.name, row.amount, row.balance
        ));
    }

    output
}
