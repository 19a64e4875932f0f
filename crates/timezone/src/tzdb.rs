//! Rule provider backed by the embedded IANA tz database.

use chrono::{DateTime, NaiveDateTime, Offset, TimeZone};
use chrono_tz::{OffsetName, Tz, TZ_VARIANTS};
use tracing::info;

use kronos_calendar::Instant;

use crate::provider::RuleProvider;

/// A [`RuleProvider`] backed by chrono-tz's embedded copy of the IANA
/// tz database.
///
/// The zone list is materialized and sorted once at load; every query
/// afterwards is read-only, so a `TzdbProvider` can be shared freely
/// across threads.
#[derive(Debug)]
pub struct TzdbProvider {
    identifiers: Vec<String>,
}

impl TzdbProvider {
    /// Loads the embedded tz database.
    ///
    /// The data is compiled into the binary, so loading cannot fail; it
    /// only materializes and sorts the identifier list.
    pub fn load() -> Self {
        let mut identifiers: Vec<String> =
            TZ_VARIANTS.iter().map(|tz| tz.name().to_string()).collect();
        identifiers.sort();
        identifiers.dedup();
        info!(
            zones = identifiers.len(),
            version = chrono_tz::IANA_TZDB_VERSION,
            "loaded embedded tz database"
        );
        Self { identifiers }
    }

    /// Returns the version of the embedded IANA tz database (e.g.
    /// `"2024b"`).
    pub fn version(&self) -> &'static str {
        chrono_tz::IANA_TZDB_VERSION
    }

    /// Resolves an identifier to its canonical casing, or `None` if it
    /// names no known zone.
    ///
    /// Tries an exact parse first (a hash lookup), then falls back to a
    /// case-insensitive scan of the zone table.
    pub fn canonical_name(&self, identifier: &str) -> Option<String> {
        if identifier.is_empty() {
            return None;
        }
        if let Ok(tz) = identifier.parse::<Tz>() {
            return Some(tz.name().to_string());
        }
        TZ_VARIANTS
            .iter()
            .find(|tz| tz.name().eq_ignore_ascii_case(identifier))
            .map(|tz| tz.name().to_string())
    }

    /// Looks up the zone's offset object at `instant`, if both the
    /// identifier and the instant are representable.
    fn offset_at(identifier: &str, instant: Instant) -> Option<<Tz as TimeZone>::Offset> {
        let tz: Tz = identifier.parse().ok()?;
        let utc: NaiveDateTime =
            DateTime::from_timestamp(instant.unix_seconds(), 0)?.naive_utc();
        Some(tz.offset_from_utc_datetime(&utc))
    }
}

impl Default for TzdbProvider {
    fn default() -> Self {
        Self::load()
    }
}

impl RuleProvider for TzdbProvider {
    fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    fn offset_minutes(&self, identifier: &str, instant: Instant) -> Option<i32> {
        let offset = Self::offset_at(identifier, instant)?;
        Some(offset.fix().local_minus_utc() / 60)
    }

    fn abbreviation(&self, identifier: &str, instant: Instant) -> Option<String> {
        let offset = Self::offset_at(identifier, instant)?;
        // Zones with purely numeric short names report no abbreviation;
        // fall back to the fixed-offset rendering (e.g. "+07:00").
        Some(match offset.abbreviation() {
            Some(abbr) => abbr.to_string(),
            None => offset.fix().to_string(),
        })
    }
}
