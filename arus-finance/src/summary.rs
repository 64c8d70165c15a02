//! JSON summary handed to the recommendation service.

use anyhow::{Context, Result};
use arus_core::{AnalysisResult, MonthlySummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthEntry {
    pub month: String,
    pub inflow: f64,
    pub outflow: f64,
    pub net: f64,
}

impl From<&MonthlySummary> for MonthEntry {
    fn from(s: &MonthlySummary) -> Self {
        Self {
            month: s.month.clone(),
            inflow: s.inflow,
            outflow: s.outflow,
            net: s.net,
        }
    }
}

/// Totals plus the chronological monthly breakdown, without raw transactions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSummary {
    pub total_inflow: f64,
    pub total_outflow: f64,
    pub closing_balance: f64,
    pub monthly_summaries: Vec<MonthEntry>,
}

impl CashFlowSummary {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            total_inflow: result.total_inflow,
            total_outflow: result.total_outflow,
            closing_balance: result.closing_balance,
            monthly_summaries: result.monthly_summaries.iter().map(MonthEntry::from).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize cash-flow summary")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arus_core::MonthKey;

    #[test]
    fn test_field_names() {
        let result = AnalysisResult {
            total_inflow: 1500.0,
            total_outflow: 900.0,
            closing_balance: 600.0,
            monthly_summaries: vec![
                MonthlySummary::new(MonthKey::new(2024, 1).unwrap(), 1000.0, 400.0),
                MonthlySummary::new(MonthKey::new(2024, 2).unwrap(), 500.0, 500.0),
            ],
            raw_transactions: vec![],
        };
        let summary = CashFlowSummary::from_result(&result);
        let v: serde_json::Value = serde_json::from_str(&summary.to_json_pretty().unwrap()).unwrap();

        assert_eq!(v["totalInflow"], 1500.0);
        assert_eq!(v["totalOutflow"], 900.0);
        assert_eq!(v["closingBalance"], 600.0);
        assert_eq!(v["monthlySummaries"][0]["month"], "Jan 2024");
        assert_eq!(v["monthlySummaries"][0]["net"], 600.0);
        assert_eq!(v["monthlySummaries"][1]["month"], "Feb 2024");
        assert_eq!(v["monthlySummaries"][1]["outflow"], 500.0);
        assert!(v.get("rawTransactions").is_none());
        assert_eq!(v["monthlySummaries"][0].as_object().unwrap().len(), 4);
    }
}
