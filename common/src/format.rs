//! Display formatting for sizes and timestamps.
//!
//! Both functions are total: any input produces a string, malformed
//! timestamps included.

use std::fmt;

use jiff::Timestamp;
use jiff::tz::TimeZone;

const SIZE_UNITS: [&str; 5] = ["o", "Ko", "Mo", "Go", "To"];
const SIZE_STEP: f64 = 1024.0;

/// Day-first layout used by the fr-FR locale, e.g. `19/10/2026 14:03:05`.
const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Human readable size in binary steps: `0 o`, `2 Ko`, `1.5 Mo`.
///
/// The value keeps at most two decimals with trailing zeros dropped. Sizes
/// past the `To` bracket are still expressed in `To`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", SIZE_UNITS[0]);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= SIZE_STEP && unit < SIZE_UNITS.len() - 1 {
        value /= SIZE_STEP;
        unit += 1;
    }

    format!("{} {}", two_decimals(value), SIZE_UNITS[unit])
}

fn two_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// A timestamp as found in a record: epoch milliseconds (`lastModified`) or
/// an ISO-8601 string (`uploadedAt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampInput<'a> {
    EpochMillis(i64),
    Text(&'a str),
}

impl TimestampInput<'_> {
    fn to_timestamp(self) -> Option<Timestamp> {
        match self {
            TimestampInput::EpochMillis(ms) => Timestamp::from_millisecond(ms).ok(),
            TimestampInput::Text(text) => parse_instant(text),
        }
    }
}

impl fmt::Display for TimestampInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampInput::EpochMillis(ms) => write!(f, "{}", ms),
            TimestampInput::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for TimestampInput<'_> {
    fn from(ms: i64) -> Self {
        TimestampInput::EpochMillis(ms)
    }
}

impl<'a> From<&'a str> for TimestampInput<'a> {
    fn from(text: &'a str) -> Self {
        TimestampInput::Text(text)
    }
}

impl<'a> From<&'a String> for TimestampInput<'a> {
    fn from(text: &'a String) -> Self {
        TimestampInput::Text(text.as_str())
    }
}

/// Formats `value` in the local time zone, falling back to the literal input
/// when it is not a representable instant.
pub fn format_timestamp<'a>(value: impl Into<TimestampInput<'a>>) -> String {
    format_timestamp_in(value, &TimeZone::system())
}

/// Same as [`format_timestamp`] with an explicit time zone.
pub fn format_timestamp_in<'a>(value: impl Into<TimestampInput<'a>>, tz: &TimeZone) -> String {
    let input = value.into();
    match input.to_timestamp() {
        Some(ts) => ts.to_zoned(tz.clone()).strftime(DISPLAY_FORMAT).to_string(),
        None => input.to_string(),
    }
}

/// Parses an RFC 3339 instant such as `2024-01-01T10:00:00.000Z`.
pub fn parse_instant(text: &str) -> Option<Timestamp> {
    text.trim().parse::<Timestamp>().ok()
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ`, the layout of `uploadedAt`.
pub fn to_iso_string(ts: Timestamp) -> String {
    format!(
        "{}.{:03}Z",
        ts.strftime("%Y-%m-%dT%H:%M:%S"),
        ts.subsec_millisecond()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_reference_values() {
        assert_eq!(format_size(0), "0 o");
        assert_eq!(format_size(1), "1 o");
        assert_eq!(format_size(1023), "1023 o");
        assert_eq!(format_size(1024), "1 Ko");
        assert_eq!(format_size(2048), "2 Ko");
        assert_eq!(format_size(1536), "1.5 Ko");
        assert_eq!(format_size(1500), "1.46 Ko");
        assert_eq!(format_size(1_048_576), "1 Mo");
        assert_eq!(format_size(1_073_741_824), "1 Go");
        assert_eq!(format_size(1_099_511_627_776), "1 To");
    }

    #[test]
    fn test_format_size_stays_in_largest_unit() {
        assert_eq!(format_size(1024 * 1_099_511_627_776), "1024 To");
    }

    #[test]
    fn test_format_size_rounding_can_reach_step() {
        // 1048575 o is 1023.999 Ko, rounded like the browser does.
        assert_eq!(format_size(1_048_575), "1024 Ko");
    }

    #[test]
    fn test_format_timestamp_millis() {
        let out = format_timestamp_in(1_704_103_200_000i64, &TimeZone::UTC);
        assert_eq!(out, "01/01/2024 10:00:00");
    }

    #[test]
    fn test_format_timestamp_iso_text() {
        let out = format_timestamp_in("2024-01-01T10:00:00.000Z", &TimeZone::UTC);
        assert_eq!(out, "01/01/2024 10:00:00");
    }

    #[test]
    fn test_format_timestamp_uses_zone_offset() {
        let tz = TimeZone::fixed(jiff::tz::offset(2));
        let out = format_timestamp_in("2024-06-01T22:30:00Z", &tz);
        assert_eq!(out, "02/06/2024 00:30:00");
    }

    #[test]
    fn test_format_timestamp_falls_back_to_literal() {
        assert_eq!(
            format_timestamp_in("pas une date", &TimeZone::UTC),
            "pas une date"
        );
        assert_eq!(format_timestamp_in(i64::MAX, &TimeZone::UTC), i64::MAX.to_string());
    }

    #[test]
    fn test_iso_string_has_millisecond_precision() {
        let ts = Timestamp::from_millisecond(1_704_103_200_123).unwrap();
        assert_eq!(to_iso_string(ts), "2024-01-01T10:00:00.123Z");
        assert_eq!(parse_instant(&to_iso_string(ts)), Some(ts));
    }
}
