//! Plain-text cash-flow report for the terminal.

use arus_core::{AnalysisResult, TransactionKind, format_rupiah};
use arus_finance::category_totals;
use std::fmt;

pub struct Report<'a> {
    pub source: &'a str,
    pub result: &'a AnalysisResult,
    /// Number of outflow categories to list
    pub top_categories: usize,
}

fn percent_id(value: f64) -> String {
    format!("{value:.1}").replace('.', ",")
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;

        writeln!(f, "# Hasil Analisis untuk {}", self.source)?;
        match r.date_range() {
            Some((first, last)) => writeln!(
                f,
                "Periode: {first} s/d {last} ({} transaksi)\n",
                r.transaction_count()
            )?,
            None => writeln!(f, "Tidak ada transaksi.\n")?,
        }

        writeln!(f, "{:<18} {:>20}", "Total Penerimaan", format_rupiah(r.total_inflow))?;
        writeln!(f, "{:<18} {:>20}", "Total Pengeluaran", format_rupiah(r.total_outflow))?;
        writeln!(f, "{:<18} {:>20}", "Saldo Akhir", format_rupiah(r.closing_balance))?;

        if !r.monthly_summaries.is_empty() {
            writeln!(f, "\n## Ringkasan Bulanan\n")?;
            writeln!(
                f,
                "{:<10} {:>18} {:>18} {:>18}",
                "Bulan", "Penerimaan", "Pengeluaran", "Arus Kas Bersih"
            )?;
            for s in &r.monthly_summaries {
                writeln!(
                    f,
                    "{:<10} {:>18} {:>18} {:>18}",
                    s.month,
                    format_rupiah(s.inflow),
                    format_rupiah(s.outflow),
                    format_rupiah(s.net)
                )?;
            }
        }

        if let Some(peak) = r.peak_outflow_month().filter(|s| s.outflow > 0.0) {
            writeln!(
                f,
                "\nPengeluaran tertinggi: {} ({})",
                peak.month,
                format_rupiah(peak.outflow)
            )?;
        }

        let categories = category_totals(&r.raw_transactions, TransactionKind::Outflow);
        if self.top_categories > 0 && !categories.is_empty() {
            writeln!(f, "\n## Kategori Pengeluaran Terbesar\n")?;
            for c in categories.iter().take(self.top_categories) {
                writeln!(
                    f,
                    "- {}: {} ({}%, {} transaksi)",
                    c.category,
                    format_rupiah(c.total),
                    percent_id(c.share_of(r.total_outflow)),
                    c.count
                )?;
            }
        }

        let deficits = r.deficit_months();
        if !deficits.is_empty() {
            writeln!(f, "\n## Bulan dengan Arus Kas Negatif\n")?;
            for s in deficits {
                writeln!(f, "- {}: {}", s.month, format_rupiah(s.net))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arus_finance::analyze;
    use arus_ingest::parse_csv_str;

    const CSV: &str = "Tanggal Transaksi,Kode Transaksi,Jenis Transaksi,Kategori,Deskripsi,Jumlah (Rp),Metode Pembayaran
2024-01-03,TRX-1,Penerimaan,Penjualan,Penjualan,1.000,Tunai
2024-01-25,TRX-2,Pengeluaran,Gaji,Gaji,400,Transfer Bank
2024-02-10,TRX-3,Penerimaan,Penjualan,Penjualan,500,Tunai
2024-02-11,TRX-4,Pengeluaran,Sewa,Sewa,600,Transfer Bank
";

    #[test]
    fn test_report_sections() {
        let result = analyze(&parse_csv_str(CSV).unwrap());
        let text = Report {
            source: "kas.csv",
            result: &result,
            top_categories: 5,
        }
        .to_string();

        assert!(text.contains("# Hasil Analisis untuk kas.csv"));
        assert!(text.contains("Periode: 2024-01-03 s/d 2024-02-11 (4 transaksi)"));
        assert!(text.contains("Rp 1.500"));
        assert!(text.contains("- Sewa: Rp 600 (60,0%, 1 transaksi)"));
        assert!(text.contains("- Feb 2024: -Rp 100"));
        assert!(text.contains("Pengeluaran tertinggi: Feb 2024 (Rp 600)"));

        let jan = text.find("Jan 2024").unwrap();
        let feb = text.find("Feb 2024").unwrap();
        assert!(jan < feb);
    }

    #[test]
    fn test_report_for_empty_input() {
        let result = analyze(&[]);
        let text = Report {
            source: "kosong.csv",
            result: &result,
            top_categories: 5,
        }
        .to_string();
        assert!(text.contains("Tidak ada transaksi."));
        assert!(text.contains("Saldo Akhir"));
        assert!(!text.contains("Ringkasan Bulanan"));
        assert!(!text.contains("Pengeluaran tertinggi"));
    }
}
