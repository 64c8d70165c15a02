//! Rupiah amount cells: "." groups thousands, no decimal part.

use regex::Regex;
use std::sync::LazyLock;

static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Parse a locale-formatted amount such as `"1.234.567"`.
///
/// Returns `None` for anything that isn't a finite, non-negative whole number
/// once the separators are gone (`"abc"`, `""`, `"-500"`, `"1,5"`).
pub fn parse_amount(raw: &str) -> Option<f64> {
    let stripped: String = raw.trim().chars().filter(|c| *c != '.').collect();
    if !DIGITS_RE.is_match(&stripped) {
        return None;
    }
    let value: f64 = stripped.parse().ok()?;
    value.is_finite().then_some(value)
}
