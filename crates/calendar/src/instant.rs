//! Instants as seconds since the Unix epoch.

/// Number of seconds in a civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// A point on the UTC timeline, in whole seconds since the Unix epoch
/// (1970-01-01T00:00:00Z).
///
/// An `Instant` carries no timezone; every function that interprets one
/// in a zone takes that zone as an explicit argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(i64);

impl Instant {
    /// Creates an instant from seconds since the Unix epoch.
    pub fn from_unix_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Returns the seconds since the Unix epoch.
    pub fn unix_seconds(self) -> i64 {
        self.0
    }

    /// Returns the number of whole civil days since the epoch, floored.
    ///
    /// Uses Euclidean division so instants before the epoch floor toward
    /// the earlier day (e.g. one second before the epoch is day -1).
    pub fn days_from_epoch(self) -> i64 {
        self.0.div_euclid(SECONDS_PER_DAY)
    }

    /// Returns the second within the civil day, 0..=86_399.
    pub fn second_of_day(self) -> u32 {
        self.0.rem_euclid(SECONDS_PER_DAY) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        let t = Instant::from_unix_seconds(0);
        assert_eq!(t.days_from_epoch(), 0);
        assert_eq!(t.second_of_day(), 0);
    }

    #[test]
    fn positive_split() {
        let t = Instant::from_unix_seconds(SECONDS_PER_DAY + 3_661);
        assert_eq!(t.days_from_epoch(), 1);
        assert_eq!(t.second_of_day(), 3_661);
    }

    #[test]
    fn negative_floors_to_previous_day() {
        let t = Instant::from_unix_seconds(-1);
        assert_eq!(t.days_from_epoch(), -1);
        assert_eq!(t.second_of_day(), 86_399);
    }

    #[test]
    fn negative_whole_day() {
        let t = Instant::from_unix_seconds(-SECONDS_PER_DAY);
        assert_eq!(t.days_from_epoch(), -1);
        assert_eq!(t.second_of_day(), 0);
    }

    #[test]
    fn ord_by_timeline() {
        assert!(Instant::from_unix_seconds(-5) < Instant::from_unix_seconds(5));
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Instant>();
    }
}
