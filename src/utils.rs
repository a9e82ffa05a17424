//! Utility functions for the depth-by-order book.

use chrono::{DateTime, Utc};

/// Builds a UTC instant from whole seconds since the Unix epoch and a
/// microsecond offset within that second.
///
/// # Arguments
///
/// * `secs` - Seconds since the Unix epoch
/// * `micros` - Microseconds within the second
///
/// # Returns
///
/// `None` if `micros` is negative or the pair is outside chrono's range.
///
/// # Examples
///
/// ```rust
/// use dbo_orderbook::utils::datetime_from_parts;
///
/// let ts = datetime_from_parts(1_700_000_000, 250_000).unwrap();
/// assert_eq!(ts.timestamp_subsec_micros(), 250_000);
/// ```
#[must_use]
pub fn datetime_from_parts(secs: i64, micros: i32) -> Option<DateTime<Utc>> {
    let nanos = u32::try_from(micros).ok()?.checked_mul(1_000)?;
    DateTime::from_timestamp(secs, nanos)
}

/// Left-pads a value into a fixed-width column.
pub(crate) fn column(value: impl std::fmt::Display, width: usize) -> String {
    let text = value.to_string();
    format!("{text:>width$}")
}
