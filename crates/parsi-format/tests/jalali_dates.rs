use parsi_format::{
    format_jalali_date, format_jalali_date_with, try_format_jalali_date, JalaliFormatError,
    DATE_FALLBACK, DEFAULT_DATE_PATTERN,
};
use pretty_assertions::assert_eq;

#[test]
fn default_pattern_renders_year_month_day() {
    assert_eq!(format_jalali_date("2024-03-20T00:00:00Z"), "۱۴۰۳/۰۱/۰۱");
    assert_eq!(format_jalali_date("2024-01-05"), "۱۴۰۲/۱۰/۱۵");
    assert_eq!(format_jalali_date("1970-01-01T00:00:00Z"), "۱۳۴۸/۱۰/۱۱");
}

#[test]
fn malformed_input_degrades_to_the_fallback() {
    assert_eq!(format_jalali_date("not-a-date"), "-");
    assert_eq!(format_jalali_date(""), "-");
    assert_eq!(format_jalali_date("2024-13-40"), "-");
    assert_eq!(format_jalali_date("not-a-date"), DATE_FALLBACK);
}

#[test]
fn conversion_failure_also_degrades_to_the_fallback() {
    // Parses fine, but the Jalali cycle table does not reach year 9378.
    assert_eq!(format_jalali_date("9999-01-01"), "-");
}

#[test]
fn custom_patterns_are_honored_exactly() {
    let iso = "2024-03-20T00:00:00Z";
    assert_eq!(format_jalali_date_with(iso, "YYYY"), "۱۴۰۳");
    assert_eq!(format_jalali_date_with(iso, "YY"), "۰۳");
    assert_eq!(format_jalali_date_with(iso, "D/M"), "۱/۱");
    assert_eq!(
        format_jalali_date_with(iso, "DD MMMM YYYY"),
        "۰۱ فروردین ۱۴۰۳"
    );
}

#[test]
fn weekday_and_literal_text() {
    // 2024-03-20 was a Wednesday.
    assert_eq!(
        format_jalali_date_with("2024-03-20T00:00:00Z", "dddd"),
        "چهارشنبه"
    );
    assert_eq!(
        format_jalali_date_with("2024-03-20T00:00:00Z", "[امروز] dddd"),
        "امروز چهارشنبه"
    );
}

#[test]
fn time_of_day_tokens() {
    assert_eq!(
        format_jalali_date_with("2024-03-20T08:05:09Z", "HH:mm:ss"),
        "۰۸:۰۵:۰۹"
    );
    assert_eq!(
        format_jalali_date_with("2024-03-20T08:05:09Z", "YYYY/MM/DD H:m:s"),
        "۱۴۰۳/۰۱/۰۱ ۸:۵:۹"
    );
}

#[test]
fn explicit_offsets_keep_their_wall_clock_date() {
    // 23:30 in Tehran on March 19 is already March 20 in UTC; the label
    // should still read Esfand 29.
    assert_eq!(
        format_jalali_date("2024-03-19T23:30:00+03:30"),
        "۱۴۰۲/۱۲/۲۹"
    );
    assert_eq!(
        format_jalali_date("2024-03-20T20:30:00-05:00"),
        "۱۴۰۳/۰۱/۰۱"
    );
}

#[test]
fn try_variant_reports_the_failure() {
    let err = try_format_jalali_date("not-a-date", DEFAULT_DATE_PATTERN).unwrap_err();
    assert_eq!(
        err,
        JalaliFormatError::UnparsableInput {
            input: "not-a-date".to_string()
        }
    );

    let ok = try_format_jalali_date("2024-03-20T00:00:00Z", DEFAULT_DATE_PATTERN).unwrap();
    assert_eq!(ok, "۱۴۰۳/۰۱/۰۱");

    assert!(matches!(
        try_format_jalali_date("9999-01-01", DEFAULT_DATE_PATTERN),
        Err(JalaliFormatError::Calendar(_))
    ));
}

#[test]
fn repeated_calls_are_deterministic() {
    let first = format_jalali_date("2024-03-20T00:00:00Z");
    for _ in 0..100 {
        assert_eq!(format_jalali_date("2024-03-20T00:00:00Z"), first);
    }
}
