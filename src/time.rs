//! Calendar helpers: leap years and ordinal dates.
//!
//! The almanac algorithm works on the day-of-year rather than on full
//! calendar dates. The closed-form derivation below avoids a cumulative
//! days-per-month table and reproduces standard ordinal dates exactly.

use crate::math::floor;

/// Tests whether a year is a Gregorian leap year.
///
/// Leap years are those divisible by 4, but not those divisible by 100,
/// except that those divisible by 400 *are* leap years.
///
/// # Example
/// ```
/// # use sunrise_almanac::time::is_leap_year;
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2023));
/// ```
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the ordinal date (day of year, 1–366) for a calendar date.
///
/// January and February are handled directly; later months use the
/// closed form `floor(30.6 * (month + 1)) + day - 122` plus the number
/// of days in January and February for the year in question.
///
/// Month is expected in 1–12 and day in 1–31; out-of-range input is not
/// validated and yields a correspondingly shifted day number.
///
/// # Example
/// ```
/// # use sunrise_almanac::time::ordinal_day;
/// assert_eq!(ordinal_day(2023, 3, 1), 60);
/// assert_eq!(ordinal_day(2024, 3, 1), 61); // leap year
/// ```
#[must_use]
pub fn ordinal_day(year: i32, month: u32, day: u32) -> u32 {
    match month {
        1 => day,
        2 => day + 31,
        _ => {
            let n = floor(30.6 * f64::from(month + 1)) as u32 + day - 122;
            n + if is_leap_year(year) { 60 } else { 59 }
        }
    }
}

/// Returns the ordinal date for any chrono date-like value.
///
/// Convenience wrapper around [`ordinal_day`] for `DateTime`, `NaiveDate`
/// and friends.
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn ordinal_day_from_date_like<D: chrono::Datelike>(date: D) -> u32 {
    ordinal_day(date.year(), date.month(), date.day())
}
