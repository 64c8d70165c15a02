//! arus-ingest: transaction CSV ingestion (header checks, row parsing, cell parsers).

pub mod csv_source;
pub mod error;
pub mod parsers;
pub mod rows;
pub mod types;

pub use csv_source::{LocatedRow, parse_csv_path, parse_csv_reader, parse_csv_str, read_raw_rows};
pub use error::IngestError;
pub use rows::{parse_row, parse_rows};
pub use types::{RawRow, REQUIRED_COLUMNS};
