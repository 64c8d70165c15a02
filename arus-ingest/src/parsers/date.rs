//! Transaction date cells.
//!
//! Accepted shapes:
//!   2024-01-15            (ISO, optionally followed by "T10:30:00" or " 10:30")
//!   2024/01/15
//!   15/01/2024  15-01-2024  15.01.2024   (day first, Indonesian convention)
//!   15 Januari 2024  15 Jan 2024  15-Agu-2024  (Indonesian or English month names)

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static MONTH_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<day>\d{1,2})[\s-]+(?P<month>[A-Za-z]+)\.?[\s-]+(?P<year>\d{4})$").unwrap()
});

const NUMERIC_FORMATS: [&str; 4] = ["%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

fn month_from_name(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "jan" | "januari" | "january" => 1,
        "feb" | "februari" | "february" => 2,
        "mar" | "maret" | "march" => 3,
        "apr" | "april" => 4,
        "mei" | "may" => 5,
        "jun" | "juni" | "june" => 6,
        "jul" | "juli" | "july" => 7,
        "agu" | "agt" | "ags" | "agustus" | "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "okt" | "oktober" | "oct" | "october" => 10,
        "nov" | "november" => 11,
        "des" | "desember" | "dec" | "december" => 12,
        _ => return None,
    };
    Some(month)
}

fn parse_iso_prefix(s: &str) -> Option<NaiveDate> {
    let (date, rest) = NaiveDate::parse_and_remainder(s, "%Y-%m-%d").ok()?;
    if rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ') {
        Some(date)
    } else {
        None
    }
}

fn parse_month_name(s: &str) -> Option<NaiveDate> {
    let caps = MONTH_NAME_RE.captures(s)?;
    let day: u32 = caps["day"].parse().ok()?;
    let month = month_from_name(&caps["month"])?;
    let year: i32 = caps["year"].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a transaction date cell. Returns `None` for unrecognised or impossible dates.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    parse_iso_prefix(s)
        .or_else(|| {
            NUMERIC_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        })
        .or_else(|| parse_month_name(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_dates() {
        assert_eq!(parse_date("2024-01-15"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date(" 2024-02-29 "), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024-01-15 08:00"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024/03/01"), Some(ymd(2024, 3, 1)));
    }

    #[test]
    fn test_day_first_dates() {
        assert_eq!(parse_date("15/01/2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("03/04/2024"), Some(ymd(2024, 4, 3)));
        assert_eq!(parse_date("31-12-2023"), Some(ymd(2023, 12, 31)));
        assert_eq!(parse_date("17.08.2024"), Some(ymd(2024, 8, 17)));
    }

    #[test]
    fn test_month_name_dates() {
        assert_eq!(parse_date("15 Januari 2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("5 Mei 2024"), Some(ymd(2024, 5, 5)));
        assert_eq!(parse_date("17 Agu 2023"), Some(ymd(2023, 8, 17)));
        assert_eq!(parse_date("01-Des-2024"), Some(ymd(2024, 12, 1)));
        assert_eq!(parse_date("9 october 2024"), Some(ymd(2024, 10, 9)));
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("bukan tanggal"), None);
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date("32/01/2024"), None);
        assert_eq!(parse_date("15 Foo 2024"), None);
        assert_eq!(parse_date("2024-01-15xyz"), None);
    }
}
