//! Persian locale data for calendar rendering.

use chrono::Weekday;

/// Jalali month names in Persian script, Farvardin first.
const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Name of a 1-based Jalali month. Out-of-range input renders as empty
/// rather than panicking; conversion output never produces one.
pub(crate) fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}

/// Persian weekday names. The Persian week starts on Saturday (شنبه); the
/// compound names join with U+200C ZERO WIDTH NON-JOINER.
pub(crate) fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sat => "شنبه",
        Weekday::Sun => "یک\u{200c}شنبه",
        Weekday::Mon => "دوشنبه",
        Weekday::Tue => "سه\u{200c}شنبه",
        Weekday::Wed => "چهارشنبه",
        Weekday::Thu => "پنج\u{200c}شنبه",
        Weekday::Fri => "جمعه",
    }
}
