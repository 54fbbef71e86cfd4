use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `--date` argument, defaulting to today.
pub fn parse_date_or_today(s: Option<&String>) -> Option<NaiveDate> {
    match s {
        Some(v) => parse_date(v),
        None => Some(today()),
    }
}

pub fn is_friday(d: NaiveDate) -> bool {
    d.weekday() == Weekday::Fri
}

const MONTHS_EN: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Parse a month selector.
///
/// Accepts:
/// - `6`, `06`                → month only
/// - `june`, `jun`, `junio`   → month only
/// - `2025-06`                → month and year
///
/// Returns `(year, month)` with `year == None` when only the month was given.
pub fn parse_month(s: &str) -> Option<(Option<i32>, u32)> {
    let s = s.trim().to_lowercase();

    if let Some((y, m)) = s.split_once('-') {
        if y.len() != 4 {
            return None;
        }
        let year: i32 = y.parse().ok()?;
        let month: u32 = m.parse().ok()?;
        return (1..=12).contains(&month).then_some((Some(year), month));
    }

    if let Ok(m) = s.parse::<u32>() {
        return (1..=12).contains(&m).then_some((None, m));
    }

    if s.len() < 3 {
        return None;
    }

    MONTHS_EN
        .iter()
        .chain(MONTHS_ES.iter())
        .position(|name| name.starts_with(s.as_str()))
        .map(|idx| (None, (idx % 12) as u32 + 1))
}

/// English month name for 1..=12, empty string otherwise.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => {
            const NAMES: [&str; 12] = [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ];
            NAMES[(month - 1) as usize]
        }
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_selectors() {
        assert_eq!(parse_month("6"), Some((None, 6)));
        assert_eq!(parse_month("06"), Some((None, 6)));
        assert_eq!(parse_month("June"), Some((None, 6)));
        assert_eq!(parse_month("jun"), Some((None, 6)));
        assert_eq!(parse_month("junio"), Some((None, 6)));
        assert_eq!(parse_month("2025-06"), Some((Some(2025), 6)));
        assert_eq!(parse_month("mar"), Some((None, 3)));
        assert_eq!(parse_month("13"), None);
        assert_eq!(parse_month("2025-13"), None);
        assert_eq!(parse_month("ju"), None);
    }

    #[test]
    fn friday_detection() {
        let fri = NaiveDate::from_ymd_opt(2025, 6, 13).unwrap();
        let thu = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
        assert!(is_friday(fri));
        assert!(!is_friday(thu));
    }
}
