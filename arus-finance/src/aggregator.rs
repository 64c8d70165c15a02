//! Aggregator: totals plus one summary per calendar month.

use arus_core::{AnalysisResult, MonthKey, MonthlySummary, Transaction, TransactionKind};
use std::collections::BTreeMap;

/// Running inflow/outflow totals for one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlowTotals {
    pub inflow: f64,
    pub outflow: f64,
}

impl FlowTotals {
    pub fn add(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Inflow => self.inflow += txn.amount,
            TransactionKind::Outflow => self.outflow += txn.amount,
        }
    }

    pub fn net(&self) -> f64 {
        self.inflow - self.outflow
    }
}

/// Aggregate transactions (any order, possibly empty) into an [`AnalysisResult`].
///
/// Buckets are keyed by [`MonthKey`], so iteration order is already
/// chronological; labels are rendered only when the summaries are built.
pub fn analyze(txns: &[Transaction]) -> AnalysisResult {
    let mut totals = FlowTotals::default();
    let mut months: BTreeMap<MonthKey, FlowTotals> = BTreeMap::new();

    for txn in txns {
        totals.add(txn);
        months.entry(txn.month()).or_default().add(txn);
    }

    let monthly_summaries = months
        .into_iter()
        .map(|(period, bucket)| MonthlySummary::new(period, bucket.inflow, bucket.outflow))
        .collect();

    AnalysisResult {
        total_inflow: totals.inflow,
        total_outflow: totals.outflow,
        closing_balance: totals.net(),
        monthly_summaries,
        raw_transactions: txns.to_vec(),
    }
}
