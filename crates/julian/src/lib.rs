//! # kronos-julian
//!
//! Julian Day Number conversion for the Kronos temporal core.
//!
//! A Julian Day Number (JDN) is a continuous integer day count
//! independent of calendar system. This crate converts between calendar
//! dates and JDNs with the canonical all-integer formulas, bridges JDNs
//! to Unix-epoch instants, and derives weekdays and month names from a
//! JDN.
//!
//! # Quick start
//!
//! ```
//! use kronos_calendar::{Calendar, CalendarDate, Instant};
//! use kronos_julian::{JulianDay, date_to_jd, jd_to_date};
//!
//! let date = CalendarDate::new(Calendar::Gregorian, 2000, 1, 1).unwrap();
//! let jd = date_to_jd(date, Calendar::Gregorian).unwrap();
//! assert_eq!(jd.get(), 2_451_545);
//! assert_eq!(jd.day_of_week(), 6); // Saturday
//! assert_eq!(jd_to_date(jd, Calendar::Gregorian).unwrap(), date);
//!
//! let jd = JulianDay::from_instant(Instant::from_unix_seconds(0));
//! assert_eq!(jd.get(), kronos_julian::UNIX_EPOCH_JDN);
//! ```
//!
//! # Architecture
//!
//! ```text
//! date_to_jd() / jd_to_date()      (convert.rs, per-calendar formulas)
//! JulianDay::from_instant() / .to_instant()   (jdn.rs, Euclidean bridge)
//! instant_to_civil() / civil_to_instant()     (civil.rs, date + second-of-day)
//! month_name() / weekday_name()    (names.rs)
//! ```
//!
//! The supported span is years -3000..=7000; conversions outside it fail
//! with [`JulianError::OutOfRange`] / [`JulianError::YearOutOfRange`]
//! rather than silently wrapping.

pub mod convert;

mod civil;
mod error;
mod jdn;
mod names;

pub use civil::{civil_to_instant, instant_to_civil};
pub use convert::{MAX_JDN, MAX_YEAR, MIN_JDN, MIN_YEAR, date_to_jd, jd_to_date};
pub use error::JulianError;
pub use jdn::{JulianDay, UNIX_EPOCH_JDN};
pub use names::{month_abbrev, month_name, weekday_abbrev, weekday_name};
