//! Short "Mon DD" display of calendar dates.

use std::fmt;

use crate::date::CalendarDate;

/// English three-letter month abbreviations, January first.
const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Display adapter rendering a date as abbreviated month and zero-padded
/// day, e.g. `Sep 22`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortDate(pub CalendarDate);

impl fmt::Display for ShortDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = MONTH_ABBREV[self.0.month() as usize - 1];
        write!(f, "{month} {:02}", self.0.day())
    }
}

/// Renders `date` as `"Mon DD"`.
pub fn format_date(date: CalendarDate) -> String {
    ShortDate(date).to_string()
}
