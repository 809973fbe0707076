//! Error types for the cropwatch-calendar crate.

/// Error type for all fallible operations in the cropwatch-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when date text is not a well-formed `YYYY-MM-DD` calendar date.
    #[error("invalid date format: {input:?} ({reason}); expected YYYY-MM-DD")]
    InvalidDateFormat {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Returned when numeric year/month/day components do not name a real date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },
}
