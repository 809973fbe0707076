//! Calendar date value type.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Length of the `YYYY-MM-DD` form.
const ISO_LEN: usize = 10;

/// Byte offsets of the two hyphens in `YYYY-MM-DD`.
const SEPARATORS: [usize; 2] = [4, 7];

/// A Gregorian calendar date with no time-of-day component.
///
/// Every value is implicitly local midnight of its day, so differences
/// between dates are always whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from year, month (1..=12) and day components.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the components do not name
    /// a real date (e.g. February 29 in a common year).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Parses strict `YYYY-MM-DD` text.
    ///
    /// Leap years follow the Gregorian rule, so `2024-02-29` parses and
    /// `2025-02-29` does not.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDateFormat`] for anything that is not
    /// exactly four year digits, two month digits and two day digits
    /// separated by hyphens, or whose month/day is out of range.
    pub fn parse(text: &str) -> Result<Self, CalendarError> {
        let invalid = |reason| CalendarError::InvalidDateFormat {
            input: text.to_string(),
            reason,
        };

        let bytes = text.as_bytes();
        if bytes.len() != ISO_LEN {
            return Err(invalid("expected 10 characters"));
        }
        for (i, &b) in bytes.iter().enumerate() {
            if SEPARATORS.contains(&i) {
                if b != b'-' {
                    return Err(invalid("expected '-' separators"));
                }
            } else if !b.is_ascii_digit() {
                return Err(invalid("non-numeric field"));
            }
        }

        // All fields are ASCII digits at this point.
        let year = digits(&bytes[0..4]) as i32;
        let month = digits(&bytes[5..7]);
        let day = digits(&bytes[8..10]);

        if !(1..=12).contains(&month) {
            return Err(invalid("month out of range"));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| invalid("day out of range for month"))
    }

    /// Returns the host's current local calendar date.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the underlying chrono date.
    pub fn naive(self) -> NaiveDate {
        self.0
    }
}

fn digits(field: &[u8]) -> u32 {
    field
        .iter()
        .fold(0, |acc, &b| acc * 10 + u32::from(b - b'0'))
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason_of(text: &str) -> &'static str {
        match CalendarDate::parse(text).unwrap_err() {
            CalendarError::InvalidDateFormat { reason, .. } => reason,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn new_valid() {
        let date = CalendarDate::new(2025, 9, 22).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 9);
        assert_eq!(date.day(), 22);
    }

    #[test]
    fn new_invalid() {
        assert_eq!(
            CalendarDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29,
            }
        );
    }

    #[test]
    fn parse_valid() {
        let date = CalendarDate::parse("2025-01-05").unwrap();
        assert_eq!(date, CalendarDate::new(2025, 1, 5).unwrap());
    }

    #[test]
    fn parse_leap_day() {
        assert!(CalendarDate::parse("2024-02-29").is_ok());
        assert!(CalendarDate::parse("2000-02-29").is_ok());
        assert_eq!(reason_of("1900-02-29"), "day out of range for month");
        assert_eq!(reason_of("2025-02-29"), "day out of range for month");
    }

    #[test]
    fn parse_feb_30() {
        assert_eq!(reason_of("2025-02-30"), "day out of range for month");
    }

    #[test]
    fn parse_day_zero() {
        assert_eq!(reason_of("2025-03-00"), "day out of range for month");
    }

    #[test]
    fn parse_bad_month() {
        assert_eq!(reason_of("2025-13-01"), "month out of range");
        assert_eq!(reason_of("2025-00-10"), "month out of range");
    }

    #[test]
    fn parse_wrong_length() {
        assert_eq!(reason_of("2025-1-5"), "expected 10 characters");
        assert_eq!(reason_of(""), "expected 10 characters");
        assert_eq!(reason_of("2025-01-05 "), "expected 10 characters");
    }

    #[test]
    fn parse_wrong_separator() {
        assert_eq!(reason_of("2025/01/05"), "expected '-' separators");
    }

    #[test]
    fn parse_non_numeric() {
        assert_eq!(reason_of("2025-0a-05"), "non-numeric field");
        assert_eq!(reason_of("+025-01-05"), "non-numeric field");
    }

    #[test]
    fn parse_keeps_input_in_error() {
        let err = CalendarDate::parse("yesterday!").unwrap_err();
        assert!(matches!(
            err,
            CalendarError::InvalidDateFormat { ref input, .. } if input == "yesterday!"
        ));
    }

    #[test]
    fn from_str_matches_parse() {
        let a: CalendarDate = "2024-12-31".parse().unwrap();
        assert_eq!(a, CalendarDate::parse("2024-12-31").unwrap());
    }

    #[test]
    fn display_is_iso() {
        let date = CalendarDate::new(987, 3, 4).unwrap();
        assert_eq!(date.to_string(), "0987-03-04");
    }

    #[test]
    fn ord_follows_calendar() {
        let a = CalendarDate::new(2024, 12, 31).unwrap();
        let b = CalendarDate::new(2025, 1, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn serde_as_iso_string() {
        let date = CalendarDate::new(2025, 9, 22).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-09-22\"");
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<CalendarDate>();
    }
}
