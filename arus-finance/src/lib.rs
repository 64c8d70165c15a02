//! arus-finance: monthly cash-flow aggregation, category totals, and the recommendation boundary

pub mod aggregator;
pub mod categories;
pub mod prompt;
pub mod recommend;
pub mod summary;

pub use aggregator::analyze;
pub use categories::{CategoryTotal, category_totals};
pub use prompt::build_prompt;
pub use recommend::{Recommender, recommend_or_fallback};
pub use summary::CashFlowSummary;
