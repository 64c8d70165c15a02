use arus_core::TransactionKind;
use arus_finance::{CashFlowSummary, analyze, build_prompt, category_totals};
use arus_ingest::parse_csv_path;
use std::path::PathBuf;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("transaksi.csv")
}

/// Real-data regression: totals and monthly buckets for the sample file.
#[test]
fn test_analyze_sample_csv() {
    let txns = parse_csv_path(sample_path()).unwrap();
    let result = analyze(&txns);

    assert_eq!(result.total_inflow, 52_300_000.0);
    assert_eq!(result.total_outflow, 51_350_000.0);
    assert_eq!(result.closing_balance, 950_000.0);
    assert_eq!(result.transaction_count(), 14);

    let months: Vec<(&str, f64, f64, f64)> = result
        .monthly_summaries
        .iter()
        .map(|s| (s.month.as_str(), s.inflow, s.outflow, s.net))
        .collect();
    assert_eq!(
        months,
        vec![
            ("Des 2023", 15_250_000.0, 14_500_000.0, 750_000.0),
            ("Jan 2024", 16_250_000.0, 10_250_000.0, 6_000_000.0),
            ("Mei 2024", 9_800_000.0, 10_800_000.0, -1_000_000.0),
            ("Agu 2024", 11_000_000.0, 15_800_000.0, -4_800_000.0),
        ]
    );

    let nets: f64 = result.monthly_summaries.iter().map(|s| s.net).sum();
    assert_eq!(nets, result.closing_balance);
}

/// Real-data regression: deficit and peak months.
#[test]
fn test_critical_months_from_sample() {
    let result = analyze(&parse_csv_path(sample_path()).unwrap());

    let deficits: Vec<&str> = result.deficit_months().iter().map(|s| s.month.as_str()).collect();
    assert_eq!(deficits, vec!["Mei 2024", "Agu 2024"]);
    assert_eq!(result.peak_outflow_month().unwrap().month, "Agu 2024");
}

/// Real-data regression: dominant spending categories.
#[test]
fn test_outflow_categories_from_sample() {
    let txns = parse_csv_path(sample_path()).unwrap();
    let out = category_totals(&txns, TransactionKind::Outflow);

    let names: Vec<&str> = out.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(names, vec!["Gaji", "Peralatan", "Sewa", "Operasional", "Pemasaran"]);
    assert_eq!(out[0].total, 25_500_000.0);
    assert_eq!(out[0].count, 3);

    let total: f64 = out.iter().map(|c| c.total).sum();
    assert_eq!(total, 51_350_000.0);
}

#[test]
fn test_summary_json_and_prompt_from_sample() {
    let result = analyze(&parse_csv_path(sample_path()).unwrap());
    let summary = CashFlowSummary::from_result(&result);

    assert_eq!(summary.monthly_summaries.len(), 4);
    assert_eq!(summary.monthly_summaries[2].month, "Mei 2024");

    let prompt = build_prompt(&summary).unwrap();
    assert!(prompt.contains("\"month\": \"Agu 2024\""));
    assert!(prompt.contains("\"totalOutflow\": 51350000.0"));
}
