use chrono::NaiveDate;

use crate::errors::{ AgendaError, AgendaResult };

/// Storage format (year-month-day)
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// User-facing format (day-month-year)
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y";

/// Stored token for a license that never expires
pub const LIFETIME_TOKEN: &str = "vitalício";

/// Label shown for lifetime licenses
pub const LIFETIME_LABEL: &str = "Vitalício";

/// Parse a date in canonical or display format, canonical first.
pub fn parse_any(input: &str) -> AgendaResult<NaiveDate> {
    let trimmed = input.trim();
    [CANONICAL_FORMAT, DISPLAY_FORMAT]
        .iter()
        .find_map(|fmt| parse_strict(trimmed, fmt))
        .ok_or_else(|| AgendaError::InvalidDateFormat(input.to_string()))
}

/// Parse a stored date; only the canonical format is accepted.
pub fn parse_canonical(input: &str) -> AgendaResult<NaiveDate> {
    parse_strict(input, CANONICAL_FORMAT).ok_or_else(|| AgendaError::InvalidDateFormat(input.to_string()))
}

/// chrono alone would take `24-01-01` as year 24, or a signed or padded year.
/// The year must be exactly four digits and month and day one or two.
fn parse_strict(input: &str, fmt: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split('-').collect();
    let [first, month, last] = parts[..] else {
        return None;
    };
    let (year, day) = if fmt == DISPLAY_FORMAT { (last, first) } else { (first, last) };

    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    if !(digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)) {
        return None;
    }

    NaiveDate::parse_from_str(input, fmt).ok()
}

pub fn format_canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// True for the stored lifetime token, in any letter case
pub fn is_lifetime(value: &str) -> bool {
    value.to_lowercase() == LIFETIME_TOKEN
}
