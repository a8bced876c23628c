//! ISO-8601 parsing and Jalali date rendering.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

use parsi_calendar::{gregorian_to_jalali, CalendarError, JalaliDate};

use crate::digits::to_persian_digits;
use crate::locale;
use crate::pattern::{tokenize, DateToken};

/// Pattern used when the caller does not supply one.
pub const DEFAULT_DATE_PATTERN: &str = "YYYY/MM/DD";

/// Sentinel returned (digit-mapped) for input that cannot be formatted.
///
/// UI code that needs to tell "no date" apart from a real one can compare
/// against this, or call [`try_format_jalali_date`] instead.
pub const DATE_FALLBACK: &str = "-";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JalaliFormatError {
    #[error("could not parse {input:?} as an ISO-8601 date-time")]
    UnparsableInput { input: String },
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Format an ISO-8601 timestamp as a Jalali calendar date in Persian digits,
/// using [`DEFAULT_DATE_PATTERN`].
///
/// Total: any input that cannot be parsed or converted yields
/// [`DATE_FALLBACK`] instead of an error.
///
/// ```
/// use parsi_format::format_jalali_date;
///
/// assert_eq!(format_jalali_date("2024-03-20T00:00:00Z"), "۱۴۰۳/۰۱/۰۱");
/// assert_eq!(format_jalali_date("not-a-date"), "-");
/// ```
pub fn format_jalali_date(iso: &str) -> String {
    format_jalali_date_with(iso, DEFAULT_DATE_PATTERN)
}

/// Like [`format_jalali_date`] with a caller-supplied pattern (the token
/// vocabulary is listed in the crate docs).
pub fn format_jalali_date_with(iso: &str, pattern: &str) -> String {
    try_format_jalali_date(iso, pattern).unwrap_or_else(|_| to_persian_digits(DATE_FALLBACK))
}

/// Fallible variant of [`format_jalali_date_with`], for callers that want to
/// distinguish a real date from unformattable input.
pub fn try_format_jalali_date(iso: &str, pattern: &str) -> Result<String, JalaliFormatError> {
    let clock = parse_iso(iso).ok_or_else(|| JalaliFormatError::UnparsableInput {
        input: iso.to_string(),
    })?;
    let date = clock.date();
    let jalali = gregorian_to_jalali(date.year(), date.month(), date.day())?;
    Ok(to_persian_digits(render(&tokenize(pattern), jalali, &clock)))
}

/// Accepted spellings for naive timestamps, tried in order after RFC 3339.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp to the wall-clock date-time to be formatted.
///
/// A timestamp with an explicit offset (or `Z`) is taken at its own wall
/// clock, so `2024-03-19T23:30:00+03:30` falls on March 19 even though the
/// UTC instant is March 20. Naive timestamps and bare dates are used as
/// written.
fn parse_iso(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(input) {
        return Some(with_offset.naive_local());
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

fn render(tokens: &[DateToken], date: JalaliDate, clock: &NaiveDateTime) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            DateToken::Year4 => out.push_str(&format!("{:04}", date.year)),
            DateToken::Year2 => out.push_str(&format!("{:02}", date.year.rem_euclid(100))),
            DateToken::Month2 => out.push_str(&format!("{:02}", date.month)),
            DateToken::Month => out.push_str(&date.month.to_string()),
            DateToken::MonthName => out.push_str(locale::month_name(date.month)),
            DateToken::Day2 => out.push_str(&format!("{:02}", date.day)),
            DateToken::Day => out.push_str(&date.day.to_string()),
            DateToken::WeekdayName => out.push_str(locale::weekday_name(clock.weekday())),
            DateToken::Hour2 => out.push_str(&format!("{:02}", clock.hour())),
            DateToken::Hour => out.push_str(&clock.hour().to_string()),
            DateToken::Minute2 => out.push_str(&format!("{:02}", clock.minute())),
            DateToken::Minute => out.push_str(&clock.minute().to_string()),
            DateToken::Second2 => out.push_str(&format!("{:02}", clock.second())),
            DateToken::Second => out.push_str(&clock.second().to_string()),
            DateToken::Literal(text) => out.push_str(text),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parsed(input: &str) -> NaiveDateTime {
        parse_iso(input).unwrap_or_else(|| panic!("expected {input:?} to parse"))
    }

    #[test]
    fn rfc3339_keeps_its_own_wall_clock_date() {
        let dt = parsed("2024-03-19T23:30:00+03:30");
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 19).unwrap());
        assert_eq!((dt.hour(), dt.minute()), (23, 30));

        let dt = parsed("2024-03-20T00:00:00Z");
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
    }

    #[test]
    fn naive_spellings_parse() {
        assert_eq!(parsed("2024-01-05T10:30:00").hour(), 10);
        assert_eq!(parsed("2024-01-05 10:30:00.250").minute(), 30);
        assert_eq!(parsed("2024-01-05T10:30").second(), 0);
        assert_eq!(
            parsed("2024-01-05").date(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert_eq!(parsed("  2024-01-05  ").hour(), 0);
    }

    #[test]
    fn garbage_does_not_parse() {
        assert_eq!(parse_iso("not-a-date"), None);
        assert_eq!(parse_iso(""), None);
        assert_eq!(parse_iso("2024-13-01"), None);
        assert_eq!(parse_iso("05/01/2024"), None);
    }
}
