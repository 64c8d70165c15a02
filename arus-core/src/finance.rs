//! Cash-flow record types: parsed transactions and aggregation results

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::MonthKey;

/// Direction of a cash movement ("Jenis Transaksi")
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    #[serde(rename = "Penerimaan")]
    Inflow,
    #[serde(rename = "Pengeluaran")]
    Outflow,
}

impl TransactionKind {
    /// Only an exact "Penerimaan" is an inflow; any other label counts as outflow.
    pub fn from_label(label: &str) -> Self {
        if label == "Penerimaan" {
            TransactionKind::Inflow
        } else {
            TransactionKind::Outflow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Inflow => "Penerimaan",
            TransactionKind::Outflow => "Pengeluaran",
        }
    }
}

/// A single parsed transaction row. Immutable once parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction date ("Tanggal Transaksi")
    pub date: NaiveDate,
    /// Transaction identifier ("Kode Transaksi")
    pub code: String,
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    /// Rupiah amount, finite and non-negative
    pub amount: f64,
    pub payment_method: String,
}

impl Transaction {
    pub fn is_inflow(&self) -> bool {
        self.kind == TransactionKind::Inflow
    }

    pub fn is_outflow(&self) -> bool {
        self.kind == TransactionKind::Outflow
    }

    /// Calendar month this transaction falls into
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

/// Inflow/outflow totals for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    pub period: MonthKey,
    /// Display label, e.g. "Jan 2024"
    pub month: String,
    pub inflow: f64,
    pub outflow: f64,
    /// inflow - outflow
    pub net: f64,
}

impl MonthlySummary {
    pub fn new(period: MonthKey, inflow: f64, outflow: f64) -> Self {
        Self {
            period,
            month: period.label(),
            inflow,
            outflow,
            net: inflow - outflow,
        }
    }

    pub fn is_deficit(&self) -> bool {
        self.net < 0.0
    }
}

/// Output of aggregating a full transaction set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub total_inflow: f64,
    pub total_outflow: f64,
    /// total_inflow - total_outflow
    pub closing_balance: f64,
    /// Ascending by calendar month
    pub monthly_summaries: Vec<MonthlySummary>,
    /// In input file order
    pub raw_transactions: Vec<Transaction>,
}

impl AnalysisResult {
    /// Months whose net cash flow is negative, in chronological order
    pub fn deficit_months(&self) -> Vec<&MonthlySummary> {
        self.monthly_summaries.iter().filter(|s| s.is_deficit()).collect()
    }

    /// Month with the largest outflow (earliest wins on ties)
    pub fn peak_outflow_month(&self) -> Option<&MonthlySummary> {
        self.monthly_summaries
            .iter()
            .fold(None, |best: Option<&MonthlySummary>, s| match best {
                Some(b) if b.outflow >= s.outflow => Some(b),
                _ => Some(s),
            })
    }

    /// First and last transaction dates, if any
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.raw_transactions.iter().map(|t| t.date).min()?;
        let max = self.raw_transactions.iter().map(|t| t.date).max()?;
        Some((min, max))
    }

    pub fn transaction_count(&self) -> usize {
        self.raw_transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(date: (i32, u32, u32), kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            code: "TRX-001".to_string(),
            kind,
            category: "Operasional".to_string(),
            description: "Biaya listrik".to_string(),
            amount,
            payment_method: "Transfer Bank".to_string(),
        }
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(TransactionKind::from_label("Penerimaan"), TransactionKind::Inflow);
        assert_eq!(TransactionKind::from_label("Pengeluaran"), TransactionKind::Outflow);
        assert_eq!(TransactionKind::from_label("Pengeluaran "), TransactionKind::Outflow);
        assert_eq!(TransactionKind::from_label("Biaya"), TransactionKind::Outflow);
        assert_eq!(TransactionKind::from_label("penerimaan"), TransactionKind::Outflow);
        assert_eq!(TransactionKind::Outflow.label(), "Pengeluaran");
    }

    #[test]
    fn test_outflow_and_month() {
        let t = txn((2024, 3, 9), TransactionKind::Outflow, 250_000.0);
        assert!(t.is_outflow());
        assert!(!t.is_inflow());
        assert_eq!(t.month().label(), "Mar 2024");
    }

    #[test]
    fn test_monthly_summary_net() {
        let s = MonthlySummary::new(MonthKey::new(2024, 1).unwrap(), 1000.0, 1400.0);
        assert_eq!(s.month, "Jan 2024");
        assert_eq!(s.net, -400.0);
        assert!(s.is_deficit());
    }

    #[test]
    fn test_result_helpers() {
        let result = AnalysisResult {
            total_inflow: 1500.0,
            total_outflow: 1900.0,
            closing_balance: -400.0,
            monthly_summaries: vec![
                MonthlySummary::new(MonthKey::new(2024, 1).unwrap(), 1000.0, 1400.0),
                MonthlySummary::new(MonthKey::new(2024, 2).unwrap(), 500.0, 500.0),
            ],
            raw_transactions: vec![
                txn((2024, 2, 3), TransactionKind::Inflow, 500.0),
                txn((2024, 1, 20), TransactionKind::Outflow, 1400.0),
            ],
        };

        let deficits = result.deficit_months();
        assert_eq!(deficits.len(), 1);
        assert_eq!(deficits[0].month, "Jan 2024");
        assert_eq!(result.peak_outflow_month().unwrap().month, "Jan 2024");

        let (first, last) = result.date_range().unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 3).unwrap());
    }

    #[test]
    fn test_serialized_field_names() {
        let t = txn((2024, 1, 5), TransactionKind::Inflow, 1_234_567.0);
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["kind"], "Penerimaan");
        assert_eq!(v["paymentMethod"], "Transfer Bank");
        assert_eq!(v["date"], "2024-01-05");
    }
}
