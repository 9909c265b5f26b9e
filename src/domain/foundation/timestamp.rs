//! Timestamp value object for immutable points in time.
//!
//! Persisted documents carry timestamps as epoch milliseconds, so the wire
//! form is a plain integer rather than an RFC 3339 string.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Immutable point in time, always UTC, millisecond precision on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>, truncated to milliseconds.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::from_epoch_millis(dt.timestamp_millis()).unwrap_or(Self(dt))
    }

    /// Creates a timestamp from epoch milliseconds.
    ///
    /// Returns `None` if the value is outside chrono's representable range.
    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Returns the timestamp as epoch milliseconds.
    pub fn as_epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_epoch_millis())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        Self::from_epoch_millis(millis).ok_or_else(|| {
            serde::de::Error::custom(format!("epoch millis out of range: {}", millis))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn timestamp_now_is_millisecond_aligned() {
        let ts = Timestamp::now();
        assert_eq!(ts.0.timestamp_subsec_nanos() % 1_000_000, 0);
        assert_eq!(Timestamp::from_epoch_millis(ts.as_epoch_millis()), Some(ts));
    }

    #[test]
    fn timestamp_from_epoch_millis_roundtrips() {
        let ts = Timestamp::from_epoch_millis(1_705_276_800_123).unwrap();
        assert_eq!(ts.as_epoch_millis(), 1_705_276_800_123);
        assert_eq!(ts.0.year(), 2024);
    }

    #[test]
    fn timestamp_serializes_as_integer() {
        let ts = Timestamp::from_epoch_millis(1000).unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1000");
    }

    #[test]
    fn timestamp_deserializes_from_integer() {
        let ts: Timestamp = serde_json::from_str("2000").unwrap();
        assert_eq!(ts.as_epoch_millis(), 2000);
    }

    #[test]
    fn timestamp_rejects_string_form() {
        let result: Result<Timestamp, _> = serde_json::from_str("\"2024-01-15T10:30:00Z\"");
        assert!(result.is_err());
    }

    #[test]
    fn timestamp_ordering_follows_epoch() {
        let earlier = Timestamp::from_epoch_millis(1000).unwrap();
        let later = Timestamp::from_epoch_millis(2000).unwrap();
        assert!(earlier < later);
        assert_eq!(earlier.max(later), later);
    }
}
