//! # kronos-timezone
//!
//! Timezone identifier, offset, and abbreviation resolution for the
//! Kronos temporal core.
//!
//! Rule data comes from a [`RuleProvider`], loaded once and queried
//! immutably for the process lifetime. The production provider,
//! [`TzdbProvider`], wraps the IANA tz database embedded by chrono-tz;
//! tests substitute a fixture provider through the same trait.
//!
//! # Quick start
//!
//! ```
//! use kronos_calendar::Instant;
//! use kronos_timezone::{TimezoneResolver, TzdbProvider};
//!
//! let resolver = TimezoneResolver::new(TzdbProvider::load());
//! let winter = Instant::from_unix_seconds(1_705_320_000); // 2024-01-15
//!
//! assert_eq!(resolver.offset_at("America/Chicago", winter).unwrap(), -360);
//! assert_eq!(resolver.abbreviation_at("America/Chicago", winter).unwrap(), "CST");
//!
//! // Deterministic: first matching identifier in canonical order.
//! let id = resolver.resolve_abbreviation("CST", winter).unwrap();
//! assert_eq!(resolver.abbreviation_at(&id, winter).unwrap(), "CST");
//! ```
//!
//! # Scope
//!
//! [`TimezoneResolver::transitions`] samples offsets at month and year
//! boundaries over a bounded window; it is deliberately not a
//! rule-walking DST engine and will not report the exact instant of a
//! mid-month transition.

mod error;
mod provider;
mod resolver;
mod tzdb;

pub use error::TimezoneError;
pub use provider::RuleProvider;
pub use resolver::{TimezoneResolver, TransitionPoint};
pub use tzdb::TzdbProvider;
