//! Offset/abbreviation queries and bounded transition sampling.

use std::collections::BTreeMap;

use tracing::debug;

use kronos_calendar::{Calendar, CalendarDate, Instant, SECONDS_PER_DAY};
use kronos_julian::civil_to_instant;

use crate::error::TimezoneError;
use crate::provider::RuleProvider;

/// A sampled offset observation for a timezone.
///
/// Produced by [`TimezoneResolver::transitions`]; one point per sampled
/// boundary, not persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionPoint {
    /// The sampled instant (a month start or a year end, UTC).
    pub instant: Instant,
    /// The zone's UTC offset in minutes at that instant, east-positive.
    pub utc_offset_minutes: i32,
}

/// Timezone queries over a loaded [`RuleProvider`].
///
/// The resolver holds the provider immutably; every method is a pure
/// query, so a resolver can be shared across threads as freely as its
/// provider.
#[derive(Debug)]
pub struct TimezoneResolver<P: RuleProvider> {
    provider: P,
}

impl<P: RuleProvider> TimezoneResolver<P> {
    /// Wraps a loaded rule provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// All known timezone identifiers, in the provider's canonical
    /// (sorted) order.
    pub fn identifiers(&self) -> &[String] {
        self.provider.identifiers()
    }

    /// The UTC offset of `identifier` in effect at `instant`, in
    /// minutes, east-positive.
    ///
    /// This is the offset actually in effect, including any seasonal
    /// adjustment, never the zone's standard offset.
    ///
    /// # Errors
    ///
    /// Returns [`TimezoneError::UnknownIdentifier`] if the provider does
    /// not recognize `identifier` (or cannot represent `instant`).
    pub fn offset_at(&self, identifier: &str, instant: Instant) -> Result<i32, TimezoneError> {
        self.provider
            .offset_minutes(identifier, instant)
            .ok_or_else(|| TimezoneError::UnknownIdentifier {
                identifier: identifier.to_string(),
            })
    }

    /// The abbreviation of `identifier` in effect at `instant`.
    ///
    /// # Errors
    ///
    /// Returns [`TimezoneError::UnknownIdentifier`] if the provider does
    /// not recognize `identifier` (or cannot represent `instant`).
    pub fn abbreviation_at(
        &self,
        identifier: &str,
        instant: Instant,
    ) -> Result<String, TimezoneError> {
        self.provider
            .abbreviation(identifier, instant)
            .ok_or_else(|| TimezoneError::UnknownIdentifier {
                identifier: identifier.to_string(),
            })
    }

    /// Resolves an abbreviation to the first identifier bearing it at
    /// `instant`.
    ///
    /// Identifiers are scanned in the provider's canonical order, so an
    /// abbreviation shared by several zones (e.g. `"CST"`) always
    /// resolves to the same identifier for the same rule set; ties are
    /// broken by ordering, not by any notion of best match. The instant
    /// is a required parameter: resolution depends on which rules are in
    /// effect, and an implicit "now" would make results unreproducible.
    ///
    /// # Errors
    ///
    /// Returns [`TimezoneError::NotFound`] if no identifier bears the
    /// abbreviation at `instant`.
    pub fn resolve_abbreviation(
        &self,
        abbreviation: &str,
        instant: Instant,
    ) -> Result<String, TimezoneError> {
        for identifier in self.provider.identifiers() {
            if let Some(abbr) = self.provider.abbreviation(identifier, instant) {
                if abbr == abbreviation {
                    debug!(abbreviation, identifier, "resolved abbreviation");
                    return Ok(identifier.clone());
                }
            }
        }
        debug!(abbreviation, "abbreviation matched no identifier");
        Err(TimezoneError::NotFound {
            abbreviation: abbreviation.to_string(),
        })
    }

    /// Maps every abbreviation in effect at `instant` to the identifiers
    /// bearing it, each list in canonical order.
    pub fn abbreviations_list(&self, instant: Instant) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for identifier in self.provider.identifiers() {
            if let Some(abbr) = self.provider.abbreviation(identifier, instant) {
                map.entry(abbr).or_default().push(identifier.clone());
            }
        }
        map
    }

    /// Samples the zone's UTC offset across `[from_year,
    /// from_year + year_span]`, inclusive.
    ///
    /// For each year the offset is observed at the first instant (UTC
    /// midnight) of every month and at the last second of the year, 13
    /// points per year, ordered by instant. This is a bounded
    /// approximation of the zone's transition history: an offset change
    /// is observable at the next sampled boundary, but a transition that
    /// occurs mid-month is not timed exactly, and a change that reverts
    /// within a single month is missed entirely.
    ///
    /// # Errors
    ///
    /// Returns [`TimezoneError::UnknownIdentifier`] if the provider does
    /// not recognize `identifier`, or an out-of-range error if the year
    /// window leaves the supported span.
    pub fn transitions(
        &self,
        identifier: &str,
        from_year: i32,
        year_span: u32,
    ) -> Result<Vec<TransitionPoint>, TimezoneError> {
        let mut points = Vec::with_capacity((year_span as usize + 1) * 13);
        for year in from_year..=from_year + year_span as i32 {
            for month in 1..=12u8 {
                let date = CalendarDate::new(Calendar::Gregorian, year, month, 1)?;
                let instant = civil_to_instant(date, 0)?;
                points.push(TransitionPoint {
                    instant,
                    utc_offset_minutes: self.offset_at(identifier, instant)?,
                });
            }
            let dec31 = CalendarDate::new(Calendar::Gregorian, year, 12, 31)?;
            let year_end = civil_to_instant(dec31, (SECONDS_PER_DAY - 1) as u32)?;
            points.push(TransitionPoint {
                instant: year_end,
                utc_offset_minutes: self.offset_at(identifier, year_end)?,
            });
        }
        debug!(
            identifier,
            from_year, year_span,
            samples = points.len(),
            "sampled timezone offsets"
        );
        Ok(points)
    }
}
