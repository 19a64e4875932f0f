//! Month and weekday naming by Julian Day Number.

use kronos_calendar::{Calendar, MONTH_ABBREVS, MONTH_NAMES, WEEKDAY_ABBREVS, WEEKDAY_NAMES};

use crate::convert::jd_to_date;
use crate::error::JulianError;
use crate::jdn::JulianDay;

/// Returns the full English month name of the day `jd` falls in.
///
/// # Errors
///
/// Returns [`JulianError::OutOfRange`] if `jd` is outside the supported
/// span.
pub fn month_name(jd: JulianDay, calendar: Calendar) -> Result<&'static str, JulianError> {
    let date = jd_to_date(jd, calendar)?;
    Ok(MONTH_NAMES[date.month() as usize - 1])
}

/// Returns the abbreviated English month name of the day `jd` falls in.
///
/// # Errors
///
/// Returns [`JulianError::OutOfRange`] if `jd` is outside the supported
/// span.
pub fn month_abbrev(jd: JulianDay, calendar: Calendar) -> Result<&'static str, JulianError> {
    let date = jd_to_date(jd, calendar)?;
    Ok(MONTH_ABBREVS[date.month() as usize - 1])
}

/// Returns the full English weekday name of `jd` (calendar-independent).
pub fn weekday_name(jd: JulianDay) -> &'static str {
    WEEKDAY_NAMES[jd.day_of_week() as usize]
}

/// Returns the abbreviated English weekday name of `jd`.
pub fn weekday_abbrev(jd: JulianDay) -> &'static str {
    WEEKDAY_ABBREVS[jd.day_of_week() as usize]
}
