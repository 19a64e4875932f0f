//! The rule-provider seam.

use kronos_calendar::Instant;

/// Source of authoritative timezone rule data.
///
/// A provider owns its rule set for the process lifetime: it is loaded
/// once, then queried immutably, so implementations must answer every
/// method without interior mutation. All resolver determinism rests on
/// [`RuleProvider::identifiers`] returning a stable, sorted list.
pub trait RuleProvider {
    /// All known timezone identifiers, in canonical (sorted) order.
    fn identifiers(&self) -> &[String];

    /// The UTC offset of `identifier` in effect at `instant`, in
    /// minutes, east-positive, including any seasonal adjustment.
    ///
    /// Returns `None` if the identifier is unknown or the instant is
    /// not representable in the provider's rule data.
    fn offset_minutes(&self, identifier: &str, instant: Instant) -> Option<i32>;

    /// The short code of `identifier` in effect at `instant` (e.g.
    /// `"CST"`, or a fixed-offset rendering like `"+07:00"` for zones
    /// without an alphabetic abbreviation).
    ///
    /// Returns `None` if the identifier is unknown or the instant is
    /// not representable in the provider's rule data.
    fn abbreviation(&self, identifier: &str, instant: Instant) -> Option<String>;
}
