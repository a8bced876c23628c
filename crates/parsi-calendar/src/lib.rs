//! Jalali (solar Hijri) calendar arithmetic.
//!
//! Converts between the Gregorian and Jalali calendars using the 33-year-cycle
//! break-table method (the algorithm behind the `jalaali` family of
//! libraries). Both directions go through the Julian Day Number so they share
//! one set of cycle computations.
//!
//! All operations are pure integer math over plain value types; there is no
//! system-clock or timezone dependency in this crate.

use std::fmt;

use thiserror::Error;

/// Jalali years at which the 33-year leap cycle resets.
///
/// The table covers years −61 through 3177; conversions outside that range
/// return [`CalendarError::YearOutOfRange`].
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// First Jalali year the cycle table covers.
pub const MIN_JALALI_YEAR: i32 = -61;
/// Last Jalali year the cycle table covers.
pub const MAX_JALALI_YEAR: i32 = 3177;

/// A date in the Jalali calendar. `month` and `day` are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl JalaliDate {
    /// Build a date, rejecting out-of-range years, months outside 1..=12 and
    /// days past the month's length (Esfand is 30 days only in leap years).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let len = jalali_month_length(year, month)?;
        if day == 0 || day > len {
            return Err(CalendarError::InvalidJalali { year, month, day });
        }
        Ok(Self { year, month, day })
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Jalali year {0} is outside the supported range (-61..=3177)")]
    YearOutOfRange(i32),
    #[error("{year:04}-{month:02}-{day:02} is not a valid Gregorian date")]
    InvalidGregorian { year: i32, month: u32, day: u32 },
    #[error("{year}/{month:02}/{day:02} is not a valid Jalali date")]
    InvalidJalali { year: i32, month: u32, day: u32 },
}

/// Convert a Gregorian calendar date to its Jalali equivalent.
pub fn gregorian_to_jalali(year: i32, month: u32, day: u32) -> Result<JalaliDate, CalendarError> {
    if !(1..=12).contains(&month) || day == 0 || day > gregorian_month_length(year, month) {
        return Err(CalendarError::InvalidGregorian { year, month, day });
    }
    jdn_to_jalali(gregorian_to_jdn(year, month, day))
}

/// Convert a Jalali date back to Gregorian `(year, month, day)`.
pub fn jalali_to_gregorian(date: JalaliDate) -> Result<(i32, u32, u32), CalendarError> {
    // Re-validate so a hand-constructed JalaliDate can't smuggle in an
    // invalid day-of-month.
    let date = JalaliDate::new(date.year, date.month, date.day)?;
    Ok(jdn_to_gregorian(jalali_to_jdn(date)?))
}

/// Whether `year` is a leap year in the Jalali calendar (Esfand has 30 days).
pub fn is_leap_jalali_year(year: i32) -> Result<bool, CalendarError> {
    Ok(cycle_position(year)?.leap == 0)
}

/// Number of days in the given Jalali month.
pub fn jalali_month_length(year: i32, month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidJalali { year, month, day: 0 });
    }
    Ok(match month {
        1..=6 => 31,
        7..=11 => 30,
        _ if is_leap_jalali_year(year)? => 30,
        _ => 29,
    })
}

/// Where a Jalali year falls in the leap cycle.
struct CyclePosition {
    /// Years since the last leap year; 0 means `year` itself is leap.
    leap: i32,
    /// Gregorian year containing the start of this Jalali year.
    gregorian_year: i32,
    /// Day of March (in `gregorian_year`) on which this Jalali year begins.
    march_day: i32,
}

/// Locate `year` within the break table and derive its leap status and the
/// Gregorian date of its first day (1 Farvardin).
///
/// Division here is deliberately truncating (`/` on integers), matching the
/// reference algorithm's `~~(a / b)`; do not switch to `div_euclid`.
fn cycle_position(year: i32) -> Result<CyclePosition, CalendarError> {
    if year < BREAKS[0] || year >= BREAKS[BREAKS.len() - 1] {
        return Err(CalendarError::YearOutOfRange(year));
    }

    let gregorian_year = year + 621;
    let mut leap_julian: i64 = -14;
    let mut period_start = i64::from(BREAKS[0]);
    let mut period_len: i64 = 0;

    for &brk in &BREAKS[1..] {
        let brk = i64::from(brk);
        period_len = brk - period_start;
        if i64::from(year) < brk {
            break;
        }
        leap_julian += period_len / 33 * 8 + period_len % 33 / 4;
        period_start = brk;
    }

    let mut n = i64::from(year) - period_start;
    leap_julian += n / 33 * 8 + (n % 33 + 3) / 4;
    if period_len % 33 == 4 && period_len - n == 4 {
        leap_julian += 1;
    }

    let gy = i64::from(gregorian_year);
    let leap_gregorian = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march_day = 20 + leap_julian - leap_gregorian;

    if period_len - n < 6 {
        n = n - period_len + (period_len + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Ok(CyclePosition {
        leap: leap as i32,
        gregorian_year,
        march_day: march_day as i32,
    })
}

/// Julian Day Number of a Gregorian date. Valid for any date with
/// `year > -100100`, which comfortably covers the Jalali cycle table.
fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let (gy, gm, gd) = (i64::from(year), i64::from(month), i64::from(day));
    let d = (gy + (gm - 8) / 6 + 100100) * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd
        - 34840408;
    d - (gy + 100100 + (gm - 8) / 6) / 100 * 3 / 4 + 752
}

/// Gregorian `(year, month, day)` of a Julian Day Number.
fn jdn_to_gregorian(jdn: i64) -> (i32, u32, u32) {
    let mut j = 4 * jdn + 139361631;
    j += (4 * jdn + 183187720) / 146097 * 3 / 4 * 4 - 3908;
    let i = j % 1461 / 4 * 5 + 308;
    let day = i % 153 / 5 + 1;
    let month = i / 153 % 12 + 1;
    let year = j / 1461 - 100100 + (8 - month) / 6;
    (year as i32, month as u32, day as u32)
}

fn jdn_to_jalali(jdn: i64) -> Result<JalaliDate, CalendarError> {
    let (gregorian_year, _, _) = jdn_to_gregorian(jdn);
    let mut year = gregorian_year - 621;
    let cycle = cycle_position(year)?;
    let farvardin_first = gregorian_to_jdn(cycle.gregorian_year, 3, cycle.march_day as u32);

    // Offset from 1 Farvardin; the first half of the year is six 31-day
    // months, the second half 30-day months.
    let mut k = jdn - farvardin_first;
    if k >= 0 {
        if k <= 185 {
            return Ok(JalaliDate {
                year,
                month: (1 + k / 31) as u32,
                day: (k % 31 + 1) as u32,
            });
        }
        k -= 186;
    } else {
        year -= 1;
        k += 179;
        if cycle.leap == 1 {
            k += 1;
        }
    }

    Ok(JalaliDate {
        year,
        month: (7 + k / 30) as u32,
        day: (k % 30 + 1) as u32,
    })
}

fn jalali_to_jdn(date: JalaliDate) -> Result<i64, CalendarError> {
    let cycle = cycle_position(date.year)?;
    let (jm, jd) = (i64::from(date.month), i64::from(date.day));
    Ok(gregorian_to_jdn(cycle.gregorian_year, 3, cycle.march_day as u32) + (jm - 1) * 31
        - jm / 7 * (jm - 7)
        + jd
        - 1)
}

fn is_leap_gregorian_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn gregorian_month_length(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_gregorian_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
