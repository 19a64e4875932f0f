//! Error types for the kronos-julian crate.

use kronos_calendar::CalendarError;

use crate::convert::{MAX_JDN, MAX_YEAR, MIN_JDN, MIN_YEAR};

/// Error type for all fallible operations in the kronos-julian crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JulianError {
    /// Returned when a Julian Day Number falls outside the supported span.
    #[error("julian day number out of range: {jdn} (supported {MIN_JDN}..={MAX_JDN})")]
    OutOfRange {
        /// The out-of-range Julian Day Number.
        jdn: i64,
    },

    /// Returned when a date's year falls outside the supported span.
    #[error("year out of range: {year} (supported {MIN_YEAR}..={MAX_YEAR})")]
    YearOutOfRange {
        /// The out-of-range year.
        year: i32,
    },

    /// A calendar rule violation (invalid month, impossible date, ...).
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
