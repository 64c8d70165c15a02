//! Prompt sent to the language model for cash-management recommendations.

use anyhow::Result;

use crate::summary::CashFlowSummary;

/// System instruction shared by every provider
pub const SYSTEM_PROMPT: &str = "Anda adalah analis modul Cash Management pada sistem ERP. \
Jawab dalam bahasa Indonesia menggunakan markdown yang terstruktur.";

/// Build the user prompt embedding the summary as pretty JSON.
pub fn build_prompt(summary: &CashFlowSummary) -> Result<String> {
    let data = summary.to_json_pretty()?;
    Ok(format!(
        r#"Berikut ringkasan arus kas (nilai dalam Rupiah):

{data}

Susun laporan dan rekomendasi manajemen keuangan berdasarkan data di atas, dengan bagian:

1. **Tren Arus Kas**: pergerakan penerimaan, pengeluaran, dan arus kas bersih sepanjang periode.
2. **Bulan Kritis**: bulan dengan pengeluaran tertinggi atau arus kas bersih negatif, kemungkinan penyebab, dan langkah mitigasi.
3. **Pola Pengeluaran**: apakah ada pengeluaran yang dominan atau tidak wajar.
4. **Rekomendasi Strategis**: 3-5 tindakan konkret, misalnya optimalisasi biaya, pengelolaan piutang, atau penempatan kas berlebih.

Gunakan heading, daftar, dan teks tebal agar mudah dibaca."#
    ))
}
