//! # kronos-calendar
//!
//! Calendar systems, validated dates, and instants for the Kronos
//! temporal core.
//!
//! This is the base crate of the workspace: it owns the value types the
//! other crates build on and the per-calendar leap-year / month-length
//! rules. It performs no conversions itself; Julian Day arithmetic lives
//! in `kronos-julian`.
//!
//! ## Quick Start
//!
//! ```
//! use kronos_calendar::{Calendar, CalendarDate, Instant};
//!
//! assert!(Calendar::Gregorian.is_leap_year(2024));
//! assert_eq!(Calendar::Gregorian.days_in_month(2024, 2).unwrap(), 29);
//!
//! // February 30 is rejected, never normalized into March.
//! assert!(CalendarDate::new(Calendar::Gregorian, 2024, 2, 30).is_err());
//!
//! let t = Instant::from_unix_seconds(-1);
//! assert_eq!(t.days_from_epoch(), -1); // floors toward the earlier day
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `system` | `Calendar` enum with leap-year and days-in-month rules |
//! | `date` | Validated `CalendarDate` |
//! | `instant` | `Instant` (seconds since the Unix epoch) |
//! | `names` | Fixed English month and weekday name tables |
//! | `error` | Error types |

mod date;
mod error;
mod instant;
mod names;
mod system;

pub use date::CalendarDate;
pub use error::CalendarError;
pub use instant::{Instant, SECONDS_PER_DAY};
pub use names::{
    MONTH_ABBREVS, MONTH_NAMES, WEEKDAY_ABBREVS, WEEKDAY_NAMES, month_name,
};
pub use system::Calendar;
