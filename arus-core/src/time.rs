//! Calendar month keys and their Indonesian (id-ID) short labels.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// id-ID abbreviated month names, January first.
pub const MONTH_ABBREVIATIONS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// A calendar month. Field order gives chronological `Ord` (year, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based month index (1 = January)
    pub month: u32,
}

impl MonthKey {
    /// Returns `None` unless `month` is in 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Abbreviated month name, e.g. "Agu"
    pub fn month_abbreviation(&self) -> &'static str {
        MONTH_ABBREVIATIONS_ID[(self.month as usize).saturating_sub(1) % 12]
    }

    /// Human label such as "Jan 2024" or "Mei 2024".
    ///
    /// Labels are for display only; they do not sort chronologically as text.
    pub fn label(&self) -> String {
        format!("{} {}", self.month_abbreviation(), self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
