//! Cell-level parsers for the transaction CSV columns.

pub mod amount;
pub mod date;

pub use amount::parse_amount;
pub use date::parse_date;
