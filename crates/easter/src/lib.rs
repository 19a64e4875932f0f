//! Ecclesiastical Easter computation.
//!
//! Computes the Gregorian ecclesiastical Easter Sunday (the computus),
//! which is distinct from astronomical Easter, and day offsets relative
//! to it. Day offsets are always computed as Julian Day Number
//! differences so they stay correct across month and year boundaries.

use kronos_calendar::{Calendar, CalendarDate};
use kronos_calendar::Instant;
use kronos_julian::{JulianDay, JulianError, date_to_jd, instant_to_civil};

/// Returns the date of Easter Sunday for `year` in the Gregorian
/// calendar.
///
/// Implements the anonymous Gregorian computus. Easter always falls in
/// March or April, so the resulting date is valid for every year.
///
/// ```
/// use kronos_easter::easter_date;
///
/// let easter = easter_date(2024);
/// assert_eq!((easter.month(), easter.day()), (3, 31));
/// ```
pub fn easter_date(year: i32) -> CalendarDate {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let j = c % 4;
    let k = (32 + 2 * e + 2 * i - h - j).rem_euclid(7);
    let l = (a + 11 * h + 22 * k) / 451;
    let month = (h + k - 7 * l + 114) / 31;
    let day = (h + k - 7 * l + 114) % 31 + 1;
    CalendarDate::new(Calendar::Gregorian, year, month as u8, day as u8)
        .expect("computus always yields a valid March or April date")
}

/// Returns the signed number of days from Easter Sunday of the
/// instant's (UTC) year to the day containing `instant`.
///
/// Negative before Easter, zero on Easter Sunday, positive after. The
/// difference is taken between Julian Day Numbers, never between
/// calendar fields.
///
/// # Errors
///
/// Returns [`JulianError::OutOfRange`] if `instant` falls outside the
/// supported span.
pub fn easter_days(instant: Instant) -> Result<i64, JulianError> {
    let (date, _) = instant_to_civil(instant)?;
    let easter_jd = date_to_jd(easter_date(date.year()), Calendar::Gregorian)?;
    let day_jd = JulianDay::from_instant(instant);
    Ok(day_jd.get() - easter_jd.get())
}
