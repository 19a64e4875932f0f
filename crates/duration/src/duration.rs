//! The `Duration` component struct and its text rendering.

/// A calendar-unit decomposition of a span of time.
///
/// Produced normalized by [`crate::diff`] (months < 12, hours < 24,
/// minutes and seconds < 60, all components non-negative, direction in
/// `inverted`); [`crate::parse_interval`] instead populates exactly one
/// field with the signed parsed amount and leaves the rest zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Duration {
    /// Whole years.
    pub years: i64,
    /// Whole months.
    pub months: i64,
    /// Whole days.
    pub days: i64,
    /// Whole hours.
    pub hours: i64,
    /// Whole minutes.
    pub minutes: i64,
    /// Whole seconds.
    pub seconds: i64,
    /// Direction flag for diffs: `true` when the first instant is the
    /// later one. Components themselves stay non-negative.
    pub inverted: bool,
}

impl Duration {
    /// Returns whether every component is zero (the diff of an instant
    /// with itself, regardless of `inverted`).
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
    }
}

/// Renders a duration's non-zero fields in year → second order.
///
/// Each field becomes `"<n> <unit>"` with a plural `s` for any count
/// other than exactly 1; fields are comma-joined and zero fields are
/// omitted. An all-zero duration renders as the empty string.
///
/// ```
/// use kronos_duration::{Duration, format_interval};
///
/// let d = Duration { years: 1, days: 2, seconds: 1, ..Duration::default() };
/// assert_eq!(format_interval(&d), "1 year, 2 days, 1 second");
/// assert_eq!(format_interval(&Duration::default()), "");
/// ```
pub fn format_interval(duration: &Duration) -> String {
    let fields = [
        (duration.years, "year"),
        (duration.months, "month"),
        (duration.days, "day"),
        (duration.hours, "hour"),
        (duration.minutes, "minute"),
        (duration.seconds, "second"),
    ];
    let parts: Vec<String> = fields
        .iter()
        .filter(|(n, _)| *n != 0)
        .map(|(n, unit)| {
            if *n == 1 {
                format!("{n} {unit}")
            } else {
                format!("{n} {unit}s")
            }
        })
        .collect();
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_all_fields() {
        let d = Duration {
            years: 2,
            months: 1,
            days: 3,
            hours: 4,
            minutes: 5,
            seconds: 6,
            inverted: false,
        };
        assert_eq!(
            format_interval(&d),
            "2 years, 1 month, 3 days, 4 hours, 5 minutes, 6 seconds"
        );
    }

    #[test]
    fn format_omits_zero_fields() {
        let d = Duration {
            months: 2,
            ..Duration::default()
        };
        assert_eq!(format_interval(&d), "2 months");
    }

    #[test]
    fn format_empty_when_all_zero() {
        assert_eq!(format_interval(&Duration::default()), "");
        assert!(Duration::default().is_zero());
    }

    #[test]
    fn format_negative_amount_is_plural() {
        let d = Duration {
            days: -1,
            ..Duration::default()
        };
        assert_eq!(format_interval(&d), "-1 days");
    }
}
