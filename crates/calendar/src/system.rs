//! Calendar systems and their leap-year / month-length rules.

use crate::error::CalendarError;

/// Number of days in each month of a common (non-leap) year
/// (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A supported calendar system.
///
/// Each system carries a stable numeric id (1 = Gregorian, 2 = Julian)
/// for callers that select calendars by number. Both calendars are
/// proleptic: their rules are extended indefinitely before and after
/// their historical adoption periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    /// The proleptic Gregorian calendar (id 1).
    Gregorian,
    /// The proleptic Julian calendar (id 2).
    Julian,
}

impl Calendar {
    /// Maps a numeric calendar id to a `Calendar`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidCalendar`] for any id other than
    /// 1 (Gregorian) or 2 (Julian).
    pub fn from_id(id: i32) -> Result<Self, CalendarError> {
        match id {
            1 => Ok(Calendar::Gregorian),
            2 => Ok(Calendar::Julian),
            _ => Err(CalendarError::InvalidCalendar { id }),
        }
    }

    /// Returns the numeric id of this calendar system.
    pub fn id(self) -> i32 {
        match self {
            Calendar::Gregorian => 1,
            Calendar::Julian => 2,
        }
    }

    /// Returns whether `year` is a leap year in this calendar.
    ///
    /// Gregorian rule: divisible by 4 and (not divisible by 100 or
    /// divisible by 400). Julian rule: divisible by 4.
    pub fn is_leap_year(self, year: i32) -> bool {
        match self {
            Calendar::Gregorian => year % 4 == 0 && (year % 100 != 0 || year % 400 == 0),
            Calendar::Julian => year % 4 == 0,
        }
    }

    /// Returns the number of days in the given month of the given year.
    ///
    /// February yields 29 in leap years per [`Calendar::is_leap_year`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
    pub fn days_in_month(self, year: i32, month: u8) -> Result<u8, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        if month == 2 && self.is_leap_year(year) {
            return Ok(29);
        }
        Ok(DAYS_PER_MONTH[month as usize])
    }
}
