//! Error types for the kronos-calendar crate.

/// Error type for all fallible operations in the kronos-calendar crate.
///
/// This enum covers unknown calendar system ids, month numbers outside
/// 1..=12, and day numbers that exceed the month length for a given
/// year and calendar system.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a numeric calendar id is not a known calendar system.
    #[error("invalid calendar id: {id} (must be 1 = Gregorian or 2 = Julian)")]
    InvalidCalendar {
        /// The unrecognized calendar id that was provided.
        id: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid date: {year}-{month:02}-{day:02} (month has {max_day} days)")]
    InvalidDate {
        /// The year of the rejected date.
        year: i32,
        /// The month of the rejected date.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },
}
