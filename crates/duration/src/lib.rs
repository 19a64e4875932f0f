//! Calendar-aware durations: diffing instants, parsing interval
//! strings, and rendering them back to text.
//!
//! A [`Duration`] holds a span decomposed into calendar units (years,
//! months, days, hours, minutes, seconds) plus a direction flag.
//! [`diff`] produces one from two instants using real month lengths;
//! [`parse_interval`] reads a single `"3 days"`-style token from text;
//! [`format_interval`] renders the non-zero fields.
//!
//! ```
//! use kronos_duration::{format_interval, parse_interval};
//!
//! let d = parse_interval("3 days").unwrap();
//! assert_eq!(format_interval(&d), "3 days");
//! ```

mod diff;
mod duration;
mod error;
mod parse;

pub use diff::diff;
pub use duration::{format_interval, Duration};
pub use error::DurationError;
pub use parse::parse_interval;
