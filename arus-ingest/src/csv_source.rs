//! Read transaction CSV files into raw rows and typed transactions.
//!
//! Expected header (any column order):
//! Tanggal Transaksi,Kode Transaksi,Jenis Transaksi,Kategori,Deskripsi,Jumlah (Rp),Metode Pembayaran

use arus_core::Transaction;
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, Result};
use crate::rows::parse_row;
use crate::types::{
    COL_AMOUNT, COL_CATEGORY, COL_CODE, COL_DATE, COL_DESCRIPTION, COL_KIND, COL_PAYMENT_METHOD,
    REQUIRED_COLUMNS, RawRow,
};

/// A raw row together with the 1-based line it started on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedRow {
    pub line: u64,
    pub row: RawRow,
}

/// Column positions of the required fields within the header
struct ColumnIndex {
    positions: [usize; 7],
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let names: Vec<&str> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}') } else { h })
            .collect();

        let mut positions = [0usize; 7];
        let mut missing = Vec::new();
        for (slot, col) in REQUIRED_COLUMNS.iter().enumerate() {
            match names.iter().position(|n| n == col) {
                Some(pos) => positions[slot] = pos,
                None => missing.push(col.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(IngestError::MissingColumns(missing));
        }
        Ok(Self { positions })
    }

    fn cell(&self, record: &StringRecord, column: &str) -> String {
        REQUIRED_COLUMNS
            .iter()
            .position(|c| *c == column)
            .and_then(|slot| record.get(self.positions[slot]))
            .unwrap_or_default()
            .to_string()
    }

    fn raw_row(&self, record: &StringRecord) -> RawRow {
        RawRow {
            date: self.cell(record, COL_DATE),
            code: self.cell(record, COL_CODE),
            kind: self.cell(record, COL_KIND),
            category: self.cell(record, COL_CATEGORY),
            description: self.cell(record, COL_DESCRIPTION),
            amount: self.cell(record, COL_AMOUNT),
            payment_method: self.cell(record, COL_PAYMENT_METHOD),
        }
    }
}

/// Read and structurally validate every row without interpreting cell values.
///
/// Empty lines are skipped. A row of empty cells (`,,,,,,`) is kept and
/// fails later as a malformed row.
pub fn read_raw_rows<R: Read>(reader: R) -> Result<Vec<LocatedRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let index = ColumnIndex::from_headers(rdr.headers()?)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = index.raw_row(&record);
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(LocatedRow { line, row });
    }

    Ok(rows)
}

/// Parse CSV content from any reader.
///
/// Structural problems (bad header, malformed CSV) are reported before any
/// row is interpreted; after that the first invalid row aborts the parse.
pub fn parse_csv_reader<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    read_raw_rows(reader)?
        .iter()
        .map(|located| parse_row(located.line, &located.row))
        .collect()
}

pub fn parse_csv_str(content: &str) -> Result<Vec<Transaction>> {
    parse_csv_reader(content.as_bytes())
}

/// Parse a transaction CSV file from disk.
pub fn parse_csv_path(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv_reader(file)
}
