//! Bridging instants to (Gregorian date, second-of-day) pairs.

use kronos_calendar::{Calendar, CalendarDate, Instant, SECONDS_PER_DAY};

use crate::convert::{date_to_jd, jd_to_date};
use crate::error::JulianError;
use crate::jdn::JulianDay;

/// Splits an instant into its proleptic Gregorian date and the second
/// within that UTC day.
///
/// # Errors
///
/// Returns [`JulianError::OutOfRange`] if the instant falls outside the
/// supported span.
pub fn instant_to_civil(instant: Instant) -> Result<(CalendarDate, u32), JulianError> {
    let date = jd_to_date(JulianDay::from_instant(instant), Calendar::Gregorian)?;
    Ok((date, instant.second_of_day()))
}

/// Combines a proleptic Gregorian date and a second-of-day into an
/// instant.
///
/// `second_of_day` may be any value in 0..=86_399; it is added verbatim
/// to the UTC midnight of the date's Julian day.
///
/// # Errors
///
/// Returns [`JulianError::YearOutOfRange`] if the date's year is outside
/// the supported span.
pub fn civil_to_instant(date: CalendarDate, second_of_day: u32) -> Result<Instant, JulianError> {
    debug_assert!(i64::from(second_of_day) < SECONDS_PER_DAY);
    let midnight = date_to_jd(date, Calendar::Gregorian)?.to_instant();
    Ok(Instant::from_unix_seconds(
        midnight.unix_seconds() + i64::from(second_of_day),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gdate(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(Calendar::Gregorian, year, month, day).unwrap()
    }

    #[test]
    fn epoch_split() {
        let (date, sod) = instant_to_civil(Instant::from_unix_seconds(0)).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1970, 1, 1));
        assert_eq!(sod, 0);
    }

    #[test]
    fn mid_day_split() {
        // 2024-03-01T12:34:56Z = 1709296496.
        let (date, sod) = instant_to_civil(Instant::from_unix_seconds(1_709_296_496)).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 1));
        assert_eq!(sod, 12 * 3600 + 34 * 60 + 56);
    }

    #[test]
    fn pre_epoch_split() {
        let (date, sod) = instant_to_civil(Instant::from_unix_seconds(-1)).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1969, 12, 31));
        assert_eq!(sod, 86_399);
    }

    #[test]
    fn roundtrip() {
        for secs in [0i64, 1, -1, 86_400, 1_709_296_496, -123_456_789] {
            let t = Instant::from_unix_seconds(secs);
            let (date, sod) = instant_to_civil(t).unwrap();
            assert_eq!(
                civil_to_instant(date, sod).unwrap(),
                t,
                "civil roundtrip failed for {secs}"
            );
        }
    }

    #[test]
    fn known_instant() {
        // 2024-01-01T00:00:00Z = 1704067200.
        let t = civil_to_instant(gdate(2024, 1, 1), 0).unwrap();
        assert_eq!(t.unix_seconds(), 1_704_067_200);
    }
}
