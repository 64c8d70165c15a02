//! The seam between the aggregation core and whatever produces narrative advice.

use anyhow::Result;

use crate::summary::CashFlowSummary;

/// Turns a cash-flow summary into free-form (usually markdown) advice.
///
/// The returned text is opaque to this crate.
pub trait Recommender {
    fn recommend(&self, summary: &CashFlowSummary) -> Result<String>;
}

/// Shown in place of the advice when the recommender fails
pub const FALLBACK_MESSAGE: &str = "Gagal memuat rekomendasi dari AI. Silakan coba lagi.";

/// Run `recommender`, substituting [`FALLBACK_MESSAGE`] on failure.
///
/// The error is handed back alongside so callers can report it.
pub fn recommend_or_fallback(
    recommender: &dyn Recommender,
    summary: &CashFlowSummary,
) -> (String, Option<anyhow::Error>) {
    match recommender.recommend(summary) {
        Ok(text) => (text, None),
        Err(e) => (FALLBACK_MESSAGE.to_string(), Some(e)),
    }
}
