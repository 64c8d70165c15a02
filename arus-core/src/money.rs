//! Rupiah formatting (id-ID conventions: "." groups thousands, no decimals)

/// Group the integer part of `value` with "." separators, rounding to whole rupiah.
///
/// `1234567.4` -> `"1.234.567"`. The sign is dropped; see [`format_rupiah`].
pub fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs().round());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format as Indonesian currency, e.g. `Rp 1.234.567` or `-Rp 400`.
pub fn format_rupiah(value: f64) -> String {
    let sign = if value.round() < 0.0 { "-" } else { "" };
    format!("{sign}Rp {}", group_thousands(value))
}
