//! Error types for the kronos-duration crate.

use kronos_calendar::CalendarError;
use kronos_julian::JulianError;

/// Error type for all fallible operations in the kronos-duration crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DurationError {
    /// Returned when an interval string contains no recognizable
    /// `<signed-integer> <unit>` token.
    #[error("no interval found in {input:?} (expected e.g. \"3 days\" or \"-1 month\")")]
    Parse {
        /// The rejected input string.
        input: String,
    },

    /// A date/instant conversion failure during diff decomposition.
    #[error(transparent)]
    Julian(#[from] JulianError),

    /// A calendar rule violation during diff decomposition.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
