use serde::{Deserialize, Serialize};
use std::fmt;

pub const COL_DATE: &str = "Tanggal Transaksi";
pub const COL_CODE: &str = "Kode Transaksi";
pub const COL_KIND: &str = "Jenis Transaksi";
pub const COL_CATEGORY: &str = "Kategori";
pub const COL_DESCRIPTION: &str = "Deskripsi";
pub const COL_AMOUNT: &str = "Jumlah (Rp)";
pub const COL_PAYMENT_METHOD: &str = "Metode Pembayaran";

/// Header names every input file must carry (order irrelevant)
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_DATE,
    COL_CODE,
    COL_KIND,
    COL_CATEGORY,
    COL_DESCRIPTION,
    COL_AMOUNT,
    COL_PAYMENT_METHOD,
];

/// One untyped input row, keyed by the fixed column names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Tanggal Transaksi")]
    pub date: String,
    #[serde(rename = "Kode Transaksi")]
    pub code: String,
    #[serde(rename = "Jenis Transaksi")]
    pub kind: String,
    #[serde(rename = "Kategori")]
    pub category: String,
    #[serde(rename = "Deskripsi")]
    pub description: String,
    #[serde(rename = "Jumlah (Rp)")]
    pub amount: String,
    #[serde(rename = "Metode Pembayaran")]
    pub payment_method: String,
}

impl RawRow {
    /// Cell value by column name
    pub fn get(&self, column: &str) -> Option<&str> {
        let v = match column {
            COL_DATE => &self.date,
            COL_CODE => &self.code,
            COL_KIND => &self.kind,
            COL_CATEGORY => &self.category,
            COL_DESCRIPTION => &self.description,
            COL_AMOUNT => &self.amount,
            COL_PAYMENT_METHOD => &self.payment_method,
            _ => return None,
        };
        Some(v.as_str())
    }
}

/// Renders the row as a JSON object so errors show the full offending content.
impl fmt::Display for RawRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{self:?}"),
        }
    }
}
