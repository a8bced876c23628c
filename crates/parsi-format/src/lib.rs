//! Persian-locale presentation formatting.
//!
//! This crate backs UI code that renders counters, scores, clock times and
//! date labels in Persian. Two operations make up the public surface:
//!
//! - [`to_persian_digits`] replaces every ASCII digit in a value's `Display`
//!   form with the matching Persian-script glyph (`۰`–`۹`), leaving all other
//!   characters in place.
//! - [`format_jalali_date`] / [`format_jalali_date_with`] parse an ISO-8601
//!   timestamp, convert it to the Jalali (solar Hijri) calendar and render it
//!   with a dayjs-style pattern, digit-mapping the result.
//!
//! Both are total. Digit mapping accepts anything displayable; date
//! formatting collapses every parse or conversion failure to
//! [`DATE_FALLBACK`] instead of returning an error, so callers can render the
//! output directly. [`try_format_jalali_date`] exposes the underlying
//! `Result` when a caller does need to distinguish failure.
//!
//! # Pattern tokens
//!
//! | Token | Output |
//! |-------|--------|
//! | `YYYY` | zero-padded 4-digit Jalali year |
//! | `YY` | last two digits of the year |
//! | `MM`, `M` | month number, padded / unpadded |
//! | `MMMM`, `MMM` | Jalali month name (فروردین … اسفند) |
//! | `DD`, `D` | day of month, padded / unpadded |
//! | `dddd` | Persian weekday name (شنبه … جمعه) |
//! | `HH`, `H` | hour (24-hour clock) |
//! | `mm`, `m` | minute |
//! | `ss`, `s` | second |
//! | `[...]` | literal text, emitted unchanged |
//!
//! Any other character is a literal. Timestamps with an explicit UTC offset
//! are formatted at their own wall-clock date; naive timestamps are used as
//! written.
//!
//! Everything here is a pure transform over its arguments: no I/O, no shared
//! state, safe to call from any number of threads.

mod datetime;
mod digits;
mod locale;
mod pattern;

pub use crate::datetime::{
    format_jalali_date, format_jalali_date_with, try_format_jalali_date, JalaliFormatError,
    DATE_FALLBACK, DEFAULT_DATE_PATTERN,
};
pub use crate::digits::to_persian_digits;

// The calendar types surface through `JalaliFormatError` and are useful to
// callers doing their own conversions.
pub use parsi_calendar::{CalendarError, JalaliDate};
