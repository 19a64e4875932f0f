//! Julian Day Number newtype and the instant bridge.

use kronos_calendar::{Instant, SECONDS_PER_DAY};

/// The Julian Day Number of the Unix epoch, 1970-01-01 (Gregorian).
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// A Julian Day Number: a continuous integer day count independent of
/// calendar system.
///
/// JDNs order the same way as the dates they represent, which makes them
/// the safe currency for any day-difference computation. Values are not
/// range-checked at construction; the calendar conversions in
/// [`crate::convert`] enforce the supported span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JulianDay(i64);

impl JulianDay {
    /// Creates a `JulianDay` from a raw day count.
    pub fn new(jdn: i64) -> Self {
        Self(jdn)
    }

    /// Returns the inner day count.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Returns the Julian Day Number of the civil day containing `instant`.
    ///
    /// The instant's seconds are floored to the containing UTC day, so
    /// every instant of a day maps to the same JDN, including instants
    /// before the epoch.
    pub fn from_instant(instant: Instant) -> Self {
        Self(instant.days_from_epoch() + UNIX_EPOCH_JDN)
    }

    /// Returns the instant at UTC midnight of this Julian day.
    ///
    /// `JulianDay::from_instant(jd.to_instant())` is the identity for
    /// every JDN.
    pub fn to_instant(self) -> Instant {
        Instant::from_unix_seconds((self.0 - UNIX_EPOCH_JDN) * SECONDS_PER_DAY)
    }

    /// Returns the day of the week, 0 = Sunday .. 6 = Saturday.
    ///
    /// Computed as `(jdn + 1) mod 7` with a Euclidean modulo, so the
    /// result is non-negative and 7-periodic for negative JDNs too.
    pub fn day_of_week(self) -> u8 {
        (self.0 + 1).rem_euclid(7) as u8
    }
}
