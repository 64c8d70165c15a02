//! arus-core: transaction, month and cash-flow summary types shared by the arus crates

pub mod finance;
pub mod money;
pub mod time;

pub use finance::{AnalysisResult, MonthlySummary, Transaction, TransactionKind};
pub use money::format_rupiah;
pub use time::MonthKey;
