//! Calendar-aware decomposition of the span between two instants.

use kronos_calendar::{Calendar, CalendarDate, Instant};
use kronos_julian::{civil_to_instant, instant_to_civil};

use crate::duration::Duration;
use crate::error::DurationError;

/// Decomposes the span between two instants into calendar units.
///
/// The elapsed time from the earlier to the later instant is broken
/// into whole years, then whole months, then whole days, then
/// hours/minutes/seconds. Year and month counts are found by advancing
/// the earlier instant's (proleptic Gregorian) date and testing whether
/// the advanced instant still does not pass the later one, so real
/// month lengths are respected rather than a fixed 30-day approximation.
/// When the anchor day-of-month does not exist in a destination month
/// (e.g. Jan 31 + 1 month), the advance clamps to the month's last day.
///
/// Direction is reported separately in [`Duration::inverted`]; the
/// components themselves are always non-negative.
///
/// ```
/// use kronos_calendar::Instant;
/// use kronos_duration::diff;
///
/// // 2024-01-01T00:00:00Z .. 2024-03-01T00:00:00Z.
/// let a = Instant::from_unix_seconds(1_704_067_200);
/// let b = Instant::from_unix_seconds(1_709_251_200);
/// let d = diff(a, b).unwrap();
/// assert_eq!((d.years, d.months, d.days), (0, 2, 0));
/// assert!(!d.inverted);
/// assert!(diff(b, a).unwrap().inverted);
/// ```
///
/// # Errors
///
/// Returns an out-of-range error if either instant (or an intermediate
/// anchor) falls outside the supported span.
pub fn diff(a: Instant, b: Instant) -> Result<Duration, DurationError> {
    let inverted = a > b;
    let (start, end) = if inverted { (b, a) } else { (a, b) };
    let (start_date, start_sod) = instant_to_civil(start)?;

    // Whole years: largest n with advance(start, n years) <= end.
    let mut years: i64 = 0;
    while fits(start_date, start_sod, years + 1, 0, end)? {
        years += 1;
    }
    // Whole months on top of the years, from the original anchor so the
    // day-of-month stays pinned to the start date.
    let mut months: i64 = 0;
    while fits(start_date, start_sod, years, months + 1, end)? {
        months += 1;
    }
    let anchor = civil_to_instant(advance(start_date, years, months)?, start_sod)?;

    // Day remainder counts whole civil days from the anchor; the anchor
    // construction above already went through Julian Day Numbers, so no
    // calendar field is ever subtracted from another.
    let mut remainder = end.unix_seconds() - anchor.unix_seconds();
    debug_assert!(remainder >= 0);
    let days = remainder.div_euclid(86_400);
    remainder = remainder.rem_euclid(86_400);
    let hours = remainder / 3_600;
    remainder %= 3_600;
    let minutes = remainder / 60;
    let seconds = remainder % 60;

    Ok(Duration {
        years,
        months,
        days,
        hours,
        minutes,
        seconds,
        inverted,
    })
}

/// Does advancing the anchor by the given years/months still not pass
/// `end`?
///
/// An advance that leaves the supported span is treated as passing
/// `end`, since `end` itself is known to be inside it.
fn fits(
    anchor: CalendarDate,
    second_of_day: u32,
    years: i64,
    months: i64,
    end: Instant,
) -> Result<bool, DurationError> {
    let Ok(date) = advance(anchor, years, months) else {
        return Ok(false);
    };
    match civil_to_instant(date, second_of_day) {
        Ok(instant) => Ok(instant <= end),
        Err(_) => Ok(false),
    }
}

/// Advances a date by whole years and months, clamping the day to the
/// destination month's length.
fn advance(date: CalendarDate, years: i64, months: i64) -> Result<CalendarDate, DurationError> {
    let total_months = i64::from(date.month()) - 1 + months;
    let year = i64::from(date.year()) + years + total_months.div_euclid(12);
    let month = (total_months.rem_euclid(12) + 1) as u8;
    let year = i32::try_from(year).unwrap_or(i32::MAX);
    let max_day = Calendar::Gregorian.days_in_month(year, month)?;
    let day = date.day().min(max_day);
    Ok(CalendarDate::new(Calendar::Gregorian, year, month, day)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gdate(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(Calendar::Gregorian, year, month, day).unwrap()
    }

    fn at(year: i32, month: u8, day: u8, sod: u32) -> Instant {
        civil_to_instant(gdate(year, month, day), sod).unwrap()
    }

    #[test]
    fn advance_plain() {
        assert_eq!(advance(gdate(2024, 1, 15), 0, 1).unwrap(), gdate(2024, 2, 15));
        assert_eq!(advance(gdate(2024, 1, 15), 1, 0).unwrap(), gdate(2025, 1, 15));
    }

    #[test]
    fn advance_clamps_to_month_length() {
        assert_eq!(advance(gdate(2024, 1, 31), 0, 1).unwrap(), gdate(2024, 2, 29));
        assert_eq!(advance(gdate(2023, 1, 31), 0, 1).unwrap(), gdate(2023, 2, 28));
        assert_eq!(advance(gdate(2024, 2, 29), 1, 0).unwrap(), gdate(2025, 2, 28));
    }

    #[test]
    fn advance_across_year_boundary() {
        assert_eq!(advance(gdate(2024, 11, 30), 0, 3).unwrap(), gdate(2025, 2, 28));
        assert_eq!(advance(gdate(2024, 11, 30), 0, 14).unwrap(), gdate(2026, 1, 30));
    }

    #[test]
    fn zero_diff() {
        let t = at(2024, 6, 15, 43_210);
        let d = diff(t, t).unwrap();
        assert!(d.is_zero());
        assert!(!d.inverted);
    }

    #[test]
    fn whole_months_between_month_starts() {
        let d = diff(at(2024, 1, 1, 0), at(2024, 3, 1, 0)).unwrap();
        assert_eq!((d.years, d.months, d.days), (0, 2, 0));
        assert_eq!((d.hours, d.minutes, d.seconds), (0, 0, 0));
    }

    #[test]
    fn inverted_flag_carries_direction() {
        let a = at(2024, 1, 1, 0);
        let b = at(2024, 3, 1, 0);
        let forward = diff(a, b).unwrap();
        let backward = diff(b, a).unwrap();
        assert!(!forward.inverted);
        assert!(backward.inverted);
        assert_eq!(forward.months, backward.months);
    }

    #[test]
    fn sub_day_units() {
        let d = diff(at(2024, 1, 1, 0), at(2024, 1, 2, 3 * 3600 + 4 * 60 + 5)).unwrap();
        assert_eq!((d.days, d.hours, d.minutes, d.seconds), (1, 3, 4, 5));
    }

    #[test]
    fn clamped_advance_completes_the_month() {
        // Jan 31 + 1 month clamps to Feb 28, landing exactly on the
        // target: one whole month.
        let d = diff(at(2023, 1, 31, 0), at(2023, 2, 28, 0)).unwrap();
        assert_eq!((d.months, d.days), (1, 0));
        // One day past the clamp point.
        let d = diff(at(2023, 1, 31, 0), at(2023, 3, 1, 0)).unwrap();
        assert_eq!((d.months, d.days), (1, 1));
        // Feb 27 is still short of the clamped month.
        let d = diff(at(2023, 1, 31, 0), at(2023, 2, 27, 0)).unwrap();
        assert_eq!((d.months, d.days), (0, 27));
    }

    #[test]
    fn leap_day_to_next_feb_is_one_year() {
        let d = diff(at(2024, 2, 29, 0), at(2025, 2, 28, 0)).unwrap();
        assert_eq!((d.years, d.months, d.days), (1, 0, 0));
    }

    #[test]
    fn different_month_lengths_respected() {
        // Mar 31 + 1 month clamps to Apr 30.
        let d = diff(at(2024, 3, 31, 0), at(2024, 4, 30, 0)).unwrap();
        assert_eq!((d.months, d.days), (1, 0));
        // One day further; the second month would need May 31.
        let d = diff(at(2024, 3, 31, 0), at(2024, 5, 1, 0)).unwrap();
        assert_eq!((d.months, d.days), (1, 1));
        // Apr 30 -> May 30 is a whole month without any clamping.
        let d = diff(at(2024, 4, 30, 0), at(2024, 5, 30, 0)).unwrap();
        assert_eq!((d.months, d.days), (1, 0));
    }

    #[test]
    fn multi_year_span() {
        let d = diff(at(2020, 6, 15, 3_600), at(2024, 8, 16, 7_200)).unwrap();
        assert_eq!((d.years, d.months, d.days), (4, 2, 1));
        assert_eq!((d.hours, d.minutes, d.seconds), (1, 0, 0));
    }

    #[test]
    fn seconds_borrow_across_midnight() {
        // 23:00 to 01:00 next day is 2 hours, no whole day.
        let d = diff(at(2024, 1, 1, 23 * 3600), at(2024, 1, 2, 3600)).unwrap();
        assert_eq!((d.days, d.hours), (0, 2));
    }

    #[test]
    fn pre_epoch_instants() {
        let d = diff(at(1969, 7, 20, 0), at(1970, 1, 1, 0)).unwrap();
        assert_eq!((d.years, d.months, d.days), (0, 5, 12));
    }
}
