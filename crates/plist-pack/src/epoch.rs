//! Conversions between calendar instants and the Apple plist epoch.
//!
//! Both plist serializations measure dates in seconds relative to
//! 2001-01-01T00:00:00Z. All conversions operate in UTC; there is no
//! timezone-offset handling here.

use chrono::{DateTime, Utc};

/// Seconds between the Unix epoch and the Apple epoch (2001-01-01T00:00:00Z).
pub const APPLE_EPOCH_UNIX_SECONDS: i64 = 978_307_200;

/// Shifts a whole-second Unix timestamp onto the Apple epoch.
pub fn unix_to_apple(unix_seconds: i64) -> i64 {
    unix_seconds - APPLE_EPOCH_UNIX_SECONDS
}

/// Shifts a whole-second Apple timestamp onto the Unix epoch.
pub fn apple_to_unix(apple_seconds: i64) -> i64 {
    apple_seconds + APPLE_EPOCH_UNIX_SECONDS
}

/// Whole seconds elapsed since the Apple epoch.
///
/// Sub-second precision is dropped: the elapsed time is floored to the
/// second, so `00:00:00.999` converts to the same timestamp as `00:00:00`.
pub fn to_apple_seconds(instant: &DateTime<Utc>) -> f64 {
    (instant.timestamp() - APPLE_EPOCH_UNIX_SECONDS) as f64
}

/// The instant `seconds` past the Apple epoch.
///
/// Fractional seconds are honored to millisecond precision. Returns `None`
/// when the timestamp falls outside the representable date range.
pub fn from_apple_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = seconds * 1000.0;
    if millis <= (i64::MIN / 2) as f64 || millis >= (i64::MAX / 2) as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(APPLE_EPOCH_UNIX_SECONDS * 1000 + millis as i64)
}
