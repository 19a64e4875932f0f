//! Validated calendar date.

use crate::error::CalendarError;
use crate::system::Calendar;

/// A validated date in a specific calendar system.
///
/// Construction rejects impossible dates (e.g. February 30) with
/// [`CalendarError::InvalidDate`] instead of normalizing them into the
/// following month. Ordering follows chronological order within a fixed
/// calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl CalendarDate {
    /// Creates a new `CalendarDate`, validated against `calendar`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside
    /// 1..=12, or [`CalendarError::InvalidDate`] if `day` exceeds the
    /// month length for the given year and calendar.
    pub fn new(calendar: Calendar, year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = calendar.days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDate {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }
}
