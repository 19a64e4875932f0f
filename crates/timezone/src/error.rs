//! Error types for the kronos-timezone crate.

use kronos_calendar::CalendarError;
use kronos_julian::JulianError;

/// Error type for all fallible operations in the kronos-timezone crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimezoneError {
    /// Returned when an identifier is not in the rule provider's list,
    /// or the provider cannot answer for the requested instant.
    #[error("unknown timezone identifier: {identifier}")]
    UnknownIdentifier {
        /// The identifier the provider did not recognize.
        identifier: String,
    },

    /// Returned when no identifier's abbreviation matches at the given
    /// instant.
    #[error("no timezone matches abbreviation {abbreviation:?} at the given instant")]
    NotFound {
        /// The abbreviation that matched no identifier.
        abbreviation: String,
    },

    /// A date/instant conversion failure while building sample points.
    #[error(transparent)]
    Julian(#[from] JulianError),

    /// A calendar rule violation while building sample points.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
