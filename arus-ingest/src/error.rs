use std::path::PathBuf;
use thiserror::Error;

use crate::types::RawRow;

/// Errors produced while turning a transaction file into typed records.
///
/// Every variant is terminal: parsing stops at the first one encountered.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The input file could not be opened.
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed CSV (bad quoting, unequal row lengths, invalid UTF-8).
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks one or more required columns.
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// The amount cell is not a non-negative number after stripping separators.
    #[error("Invalid number format for 'Jumlah (Rp)' ({value:?}) at line {line} in row: {row}")]
    InvalidAmount { line: u64, value: String, row: RawRow },

    /// The date cell matches none of the accepted date formats.
    #[error("Invalid date for 'Tanggal Transaksi' ({value:?}) at line {line} in row: {row}")]
    InvalidDate { line: u64, value: String, row: RawRow },

}

impl IngestError {
    /// The offending row, for row-level failures
    pub fn row(&self) -> Option<&RawRow> {
        match self {
            IngestError::InvalidAmount { row, .. } | IngestError::InvalidDate { row, .. } => {
                Some(row)
            }
            _ => None,
        }
    }

    /// 1-based line number of the offending row, for row-level failures
    pub fn line(&self) -> Option<u64> {
        match self {
            IngestError::InvalidAmount { line, .. } | IngestError::InvalidDate { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
