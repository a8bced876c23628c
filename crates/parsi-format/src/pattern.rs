//! Date pattern compilation.
//!
//! Patterns use the dayjs-style token vocabulary the UI layer already speaks:
//! `YYYY` `YY` for years, `MMMM`/`MMM` for the Jalali month name, `MM` `M`
//! `DD` `D` for numeric month/day, `dddd` for the weekday name, and
//! `HH` `H` `mm` `m` `ss` `s` for time of day. Text wrapped in `[...]` is
//! emitted literally; any character that starts no token is literal too.

/// One element of a compiled date pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DateToken {
    /// Zero-padded 4-digit year (`YYYY`).
    Year4,
    /// Last two digits of the year (`YY`).
    Year2,
    /// Zero-padded month number (`MM`).
    Month2,
    /// Month number without padding (`M`).
    Month,
    /// Jalali month name (`MMMM`, `MMM`).
    MonthName,
    /// Zero-padded day of month (`DD`).
    Day2,
    /// Day of month without padding (`D`).
    Day,
    /// Weekday name (`dddd`).
    WeekdayName,
    /// Zero-padded hour, 24-hour clock (`HH`).
    Hour2,
    /// Hour without padding (`H`).
    Hour,
    /// Zero-padded minute (`mm`).
    Minute2,
    /// Minute without padding (`m`).
    Minute,
    /// Zero-padded second (`ss`).
    Second2,
    /// Second without padding (`s`).
    Second,
    Literal(String),
}

/// Token spellings, longest first so greedy matching picks `YYYY` over `YY`.
const TOKEN_TABLE: [(&str, DateToken); 15] = [
    ("YYYY", DateToken::Year4),
    ("YY", DateToken::Year2),
    ("MMMM", DateToken::MonthName),
    ("MMM", DateToken::MonthName),
    ("MM", DateToken::Month2),
    ("M", DateToken::Month),
    ("DD", DateToken::Day2),
    ("D", DateToken::Day),
    ("dddd", DateToken::WeekdayName),
    ("HH", DateToken::Hour2),
    ("H", DateToken::Hour),
    ("mm", DateToken::Minute2),
    ("m", DateToken::Minute),
    ("ss", DateToken::Second2),
    ("s", DateToken::Second),
];

/// Compile a pattern string into tokens. Never fails: unrecognized input
/// degrades to literal text, so a caller-supplied pattern is always honored
/// character for character.
pub(crate) fn tokenize(pattern: &str) -> Vec<DateToken> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;

    while !rest.is_empty() {
        // `[...]` escapes literal text, dayjs-style. An unterminated bracket
        // is treated as a literal `[`.
        if let Some(after) = rest.strip_prefix('[') {
            if let Some(end) = after.find(']') {
                literal.push_str(&after[..end]);
                rest = &after[end + 1..];
                continue;
            }
        }

        if let Some((spelling, token)) = TOKEN_TABLE
            .iter()
            .find(|(spelling, _)| rest.starts_with(spelling))
        {
            if !literal.is_empty() {
                tokens.push(DateToken::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(token.clone());
            rest = &rest[spelling.len()..];
            continue;
        }

        if let Some(ch) = rest.chars().next() {
            literal.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    if !literal.is_empty() {
        tokens.push(DateToken::Literal(literal));
    }
    tokens
}
