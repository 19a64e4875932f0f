//! Single-unit interval parsing.

use crate::duration::Duration;
use crate::error::DurationError;

/// Parses the first `<signed-integer> <unit>` token in `text` into a
/// duration with that single field populated.
///
/// Units are `second`, `minute`, `hour`, `day`, `month`, and `year`,
/// each with an optional trailing `s`; whitespace between the number
/// and the unit is optional. Any surrounding text is ignored, so
/// `"every 3 days or so"` parses as 3 days. Composite strings (ISO-8601
/// durations, `"1 year 2 months"`) are not supported: only the first
/// recognizable token counts.
///
/// ```
/// use kronos_duration::parse_interval;
///
/// assert_eq!(parse_interval("3 days").unwrap().days, 3);
/// assert_eq!(parse_interval("-2 months").unwrap().months, -2);
/// assert!(parse_interval("bogus").is_err());
/// ```
///
/// # Errors
///
/// Returns [`DurationError::Parse`] if no token is found.
pub fn parse_interval(text: &str) -> Result<Duration, DurationError> {
    let bytes = text.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        // Candidate number: optional sign followed by at least one digit.
        let start = pos;
        let mut cursor = pos;
        if bytes[cursor] == b'+' || bytes[cursor] == b'-' {
            cursor += 1;
        }
        let digits_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor == digits_start {
            pos += 1;
            continue;
        }
        let Ok(amount) = text[start..cursor].parse::<i64>() else {
            pos = cursor;
            continue;
        };
        // Optional whitespace, then the unit word.
        let mut unit_start = cursor;
        while unit_start < bytes.len() && bytes[unit_start].is_ascii_whitespace() {
            unit_start += 1;
        }
        let mut unit_end = unit_start;
        while unit_end < bytes.len() && bytes[unit_end].is_ascii_alphabetic() {
            unit_end += 1;
        }
        if let Some(duration) = for_unit(&text[unit_start..unit_end], amount) {
            return Ok(duration);
        }
        // Not a unit word; keep scanning after this number.
        pos = cursor;
    }
    Err(DurationError::Parse {
        input: text.to_string(),
    })
}

fn for_unit(unit: &str, amount: i64) -> Option<Duration> {
    let singular = unit.strip_suffix('s').filter(|u| !u.is_empty()).unwrap_or(unit);
    let mut duration = Duration::default();
    match singular {
        "year" => duration.years = amount,
        "month" => duration.months = amount,
        "day" => duration.days = amount,
        "hour" => duration.hours = amount,
        "minute" => duration.minutes = amount,
        "second" => duration.seconds = amount,
        _ => return None,
    }
    Some(duration)
}
