//! Calendar date <-> Julian Day Number conversion.
//!
//! Both directions use the canonical all-integer calendrical formulas
//! (Fliegel & Van Flandern for the Gregorian calendar, the standard
//! Julian-calendar pair), never a round-trip through an instant. This
//! keeps the conversion exact: `jd_to_date(date_to_jd(d))` reproduces
//! every valid date in the supported span bit-for-bit.

use kronos_calendar::{Calendar, CalendarDate};

use crate::error::JulianError;
use crate::jdn::JulianDay;

/// Earliest supported year (~5000 years before the Unix epoch).
pub const MIN_YEAR: i32 = -3000;
/// Latest supported year (~5000 years after the Unix epoch).
pub const MAX_YEAR: i32 = 7000;

/// JDN of Julian -3000-01-01, the lower bound of the supported span
/// (the earlier of the two calendars' year -3000 starts).
pub const MIN_JDN: i64 = 625_308;
/// JDN of Julian 7000-12-31, the upper bound of the supported span
/// (the later of the two calendars' year 7000 ends).
pub const MAX_JDN: i64 = 4_278_173;

/// Converts a calendar date to its Julian Day Number.
///
/// # Errors
///
/// Returns [`JulianError::YearOutOfRange`] if the date's year is outside
/// the supported span.
pub fn date_to_jd(date: CalendarDate, calendar: Calendar) -> Result<JulianDay, JulianError> {
    let year = date.year();
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(JulianError::YearOutOfRange { year });
    }
    let y = i64::from(year);
    let m = i64::from(date.month());
    let d = i64::from(date.day());
    let jdn = match calendar {
        Calendar::Gregorian => {
            // Fliegel & Van Flandern (1968). Truncating division
            // throughout; the +4800 offsets keep intermediates positive.
            let a = (m - 14) / 12;
            (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
                - (3 * ((y + 4900 + a) / 100)) / 4
                + d
                - 32075
        }
        Calendar::Julian => 367 * y - (7 * (y + 5001 + (m - 9) / 7)) / 4 + (275 * m) / 9 + d
            + 1_729_777,
    };
    Ok(JulianDay::new(jdn))
}

/// Converts a Julian Day Number back to a calendar date.
///
/// # Errors
///
/// Returns [`JulianError::OutOfRange`] if `jd` is outside the supported
/// span.
pub fn jd_to_date(jd: JulianDay, calendar: Calendar) -> Result<CalendarDate, JulianError> {
    let jdn = jd.get();
    if !(MIN_JDN..=MAX_JDN).contains(&jdn) {
        return Err(JulianError::OutOfRange { jdn });
    }
    let (year, month, day) = match calendar {
        Calendar::Gregorian => {
            let mut l = jdn + 68569;
            let n = (4 * l) / 146097;
            l -= (146097 * n + 3) / 4;
            let i = (4000 * (l + 1)) / 1461001;
            l = l - (1461 * i) / 4 + 31;
            let j = (80 * l) / 2447;
            let d = l - (2447 * j) / 80;
            let l2 = j / 11;
            let m = j + 2 - 12 * l2;
            let y = 100 * (n - 49) + i + l2;
            (y, m, d)
        }
        Calendar::Julian => {
            let j = jdn + 1402;
            let k = (j - 1) / 1461;
            let l = j - 1461 * k;
            let n = (l - 1) / 365 - l / 1461;
            let i = l - 365 * n + 30;
            let j2 = (80 * i) / 2447;
            let d = i - (2447 * j2) / 80;
            let i2 = j2 / 11;
            let m = j2 + 2 - 12 * i2;
            let y = 4 * k + n + i2 - 4716;
            (y, m, d)
        }
    };
    Ok(CalendarDate::new(
        calendar,
        year as i32,
        month as u8,
        day as u8,
    )?)
}
