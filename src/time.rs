//! Conversion between UTC timestamps and microseconds since the Unix epoch.

use crate::types::into_utc_trait::IntoUtcDateTime;
use chrono::{DateTime, Utc};

/// Converts a timestamp into the number of microseconds since 1970-01-01T00:00:00Z.
///
/// Any sub-microsecond part of `date` is truncated. Instants before the epoch
/// yield negative counts. A `NaiveDateTime` is interpreted as UTC.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use dmi_open_data::date_to_microseconds;
///
/// let date = Utc.with_ymd_and_hms(2020, 12, 20, 0, 0, 0).unwrap();
/// assert_eq!(date_to_microseconds(date), 1_608_422_400_000_000);
/// ```
pub fn date_to_microseconds(date: impl IntoUtcDateTime) -> i64 {
    date.into_utc().timestamp_micros()
}

/// Converts microseconds since the Unix epoch back into a UTC timestamp.
///
/// Inverse of [`date_to_microseconds`]. Counts outside the range chrono can
/// represent saturate to [`DateTime::<Utc>::MIN_UTC`] or [`DateTime::<Utc>::MAX_UTC`].
pub fn microseconds_to_date(microseconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_micros(microseconds).unwrap_or(if microseconds < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
