//! Day counting for interest accrual.
//!
//! Dates are whole-day values; interest accrues per day at an annual rate
//! divided by the actual length of the year (actual/365 or actual/366).

use chrono::{Datelike, NaiveDate};

/// Counts the accrual days in the range from `start` to `end`.
///
/// The start date accrues interest; the end date does not: a judgment
/// entered July 1 accrues interest through June 30. Returns 0 when `end`
/// is on or before `start`.
///
/// # Example
///
/// ```
/// use coi_engine::calculation::days_between;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
/// assert_eq!(days_between(start, end), 182);
///
/// assert_eq!(days_between(start, start), 0);
/// assert_eq!(days_between(end, start), 0);
/// ```
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days().max(0)
}

/// Returns true if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The number of days in `year`: 366 for leap years, 365 otherwise.
///
/// # Example
///
/// ```
/// use coi_engine::calculation::days_in_year;
///
/// assert_eq!(days_in_year(2024), 366);
/// assert_eq!(days_in_year(2025), 365);
/// assert_eq!(days_in_year(1900), 365);
/// assert_eq!(days_in_year(2000), 366);
/// ```
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// The annualization divisor for a segment starting on `start_date`.
///
/// The segment's start year fixes the divisor for the whole segment, even
/// when the segment straddles a year boundary. Segments are not force-split
/// at year ends; this is an intentional approximation carried over from the
/// source regime, since changing it would alter financial results.
pub fn divisor_for(start_date: NaiveDate) -> u32 {
    days_in_year(start_date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_half_year_2024() {
        assert_eq!(days_between(date("2024-01-01"), date("2024-07-01")), 182);
    }

    #[test]
    fn test_second_quarter_2024() {
        assert_eq!(days_between(date("2024-04-01"), date("2024-07-01")), 91);
    }

    #[test]
    fn test_single_day() {
        assert_eq!(days_between(date("2024-03-01"), date("2024-03-02")), 1);
    }

    #[test]
    fn test_same_day_is_zero() {
        assert_eq!(days_between(date("2024-03-01"), date("2024-03-01")), 0);
    }

    #[test]
    fn test_inverted_range_is_zero() {
        assert_eq!(days_between(date("2024-07-01"), date("2024-01-01")), 0);
    }

    #[test]
    fn test_across_leap_day() {
        // 2024-02-28 through 2024-02-29 accrue
        assert_eq!(days_between(date("2024-02-28"), date("2024-03-01")), 2);
        // 2023 has no Feb 29
        assert_eq!(days_between(date("2023-02-28"), date("2023-03-01")), 1);
    }

    #[test]
    fn test_across_year_boundary() {
        assert_eq!(days_between(date("2023-12-01"), date("2024-02-01")), 62);
    }

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2400));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
    }

    #[test]
    fn test_divisor_uses_segment_start_year() {
        // A segment starting in December 2023 keeps the 365 divisor even if
        // it runs into leap-year 2024.
        assert_eq!(divisor_for(date("2023-12-01")), 365);
        assert_eq!(divisor_for(date("2024-12-01")), 366);
    }
}
