//! Row Parser: untyped rows to validated `Transaction`s.

use arus_core::{Transaction, TransactionKind};

use crate::error::{IngestError, Result};
use crate::parsers::{parse_amount, parse_date};
use crate::types::RawRow;

/// Line number of the first data row (line 1 is the header).
pub const FIRST_DATA_LINE: u64 = 2;

/// Parse one row. `line` is only used to locate the row in error messages.
pub fn parse_row(line: u64, row: &RawRow) -> Result<Transaction> {
    let amount = parse_amount(&row.amount).ok_or_else(|| IngestError::InvalidAmount {
        line,
        value: row.amount.clone(),
        row: row.clone(),
    })?;

    let date = parse_date(&row.date).ok_or_else(|| IngestError::InvalidDate {
        line,
        value: row.date.clone(),
        row: row.clone(),
    })?;

    Ok(Transaction {
        date,
        code: row.code.clone(),
        kind: TransactionKind::from_label(&row.kind),
        category: row.category.clone(),
        description: row.description.clone(),
        amount,
        payment_method: row.payment_method.clone(),
    })
}

/// Parse every row in order, stopping at the first invalid one.
///
/// Rows are numbered from [`FIRST_DATA_LINE`]; no partial result is returned on failure.
pub fn parse_rows(rows: &[RawRow]) -> Result<Vec<Transaction>> {
    rows.iter()
        .zip(FIRST_DATA_LINE..)
        .map(|(row, line)| parse_row(line, row))
        .collect()
}
