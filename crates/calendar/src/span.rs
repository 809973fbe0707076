//! Whole-day differences and offsets between calendar dates.

use chrono::{Days, NaiveDate};

use crate::date::CalendarDate;

/// Returns `to - from` in whole calendar days.
///
/// Negative when `to` precedes `from`.
pub fn days_between(from: CalendarDate, to: CalendarDate) -> i64 {
    to.naive().signed_duration_since(from.naive()).num_days()
}

/// Returns the date `n` whole days after `date` (`n` may be negative).
///
/// Offsets that would leave chrono's representable range saturate at the
/// range bound.
pub fn add_days(date: CalendarDate, n: i64) -> CalendarDate {
    let base = date.naive();
    let step = Days::new(n.unsigned_abs());
    let shifted = if n >= 0 {
        base.checked_add_days(step).unwrap_or(NaiveDate::MAX)
    } else {
        base.checked_sub_days(step).unwrap_or(NaiveDate::MIN)
    };
    CalendarDate::from(shifted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn same_day_is_zero() {
        let d = date(2025, 6, 1);
        assert_eq!(days_between(d, d), 0);
    }

    #[test]
    fn forward_and_backward() {
        let a = date(2025, 1, 1);
        let b = date(2025, 3, 1);
        assert_eq!(days_between(a, b), 59);
        assert_eq!(days_between(b, a), -59);
    }

    #[test]
    fn across_leap_february() {
        assert_eq!(days_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(days_between(date(2025, 2, 28), date(2025, 3, 1)), 1);
    }

    #[test]
    fn full_years() {
        assert_eq!(days_between(date(2024, 1, 1), date(2025, 1, 1)), 366);
        assert_eq!(days_between(date(2025, 1, 1), date(2026, 1, 1)), 365);
    }

    #[test]
    fn add_zero() {
        let d = date(2025, 9, 22);
        assert_eq!(add_days(d, 0), d);
    }

    #[test]
    fn add_across_year_end() {
        assert_eq!(add_days(date(2024, 12, 30), 3), date(2025, 1, 2));
    }

    #[test]
    fn add_negative() {
        assert_eq!(add_days(date(2025, 3, 1), -1), date(2025, 2, 28));
        assert_eq!(add_days(date(2024, 3, 1), -1), date(2024, 2, 29));
    }

    #[test]
    fn add_saturates() {
        let d = date(2025, 1, 1);
        assert_eq!(add_days(d, i64::MAX).naive(), NaiveDate::MAX);
        assert_eq!(add_days(d, i64::MIN).naive(), NaiveDate::MIN);
    }
}
