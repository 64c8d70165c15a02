//! Per-category totals, used to surface dominant spending or income sources.

use arus_core::{Transaction, TransactionKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub kind: TransactionKind,
    pub total: f64,
    pub count: usize,
}

impl CategoryTotal {
    /// Share of `grand_total` as a percentage (0 when the grand total is 0)
    pub fn share_of(&self, grand_total: f64) -> f64 {
        if grand_total > 0.0 {
            self.total / grand_total * 100.0
        } else {
            0.0
        }
    }
}

/// Totals per category for one direction, largest first (ties by name).
pub fn category_totals(txns: &[Transaction], kind: TransactionKind) -> Vec<CategoryTotal> {
    let mut groups: HashMap<&str, (f64, usize)> = HashMap::new();
    for txn in txns.iter().filter(|t| t.kind == kind) {
        let entry = groups.entry(txn.category.as_str()).or_default();
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let mut totals: Vec<CategoryTotal> = groups
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category: category.to_string(),
            kind,
            total,
            count,
        })
        .collect();

    totals.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });
    totals
}
