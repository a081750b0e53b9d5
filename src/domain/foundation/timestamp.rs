//! Timestamp value object for immutable points in time.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::ValidationError;

/// Immutable point in time, always UTC.
///
/// Serializes as RFC 3339 text with millisecond precision and a `Z` suffix,
/// so stored values sort lexically in time order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment, at millisecond precision.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(3))
    }

    /// Renders the sortable text form used in persisted records.
    pub fn to_sortable_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Parses an RFC 3339 string back into a timestamp.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| ValidationError::invalid_format("timestamp", e.to_string()))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_sortable_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(de::Error::custom)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.0 >= before.trunc_subsecs(3));
        assert!(ts.0 <= after);
    }

    #[test]
    fn sortable_string_uses_millis_and_zulu() {
        let ts = Timestamp::parse("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(ts.to_sortable_string(), "2024-01-15T10:30:00.000Z");
    }

    #[test]
    fn sortable_strings_order_like_timestamps() {
        let earlier = Timestamp::parse("2024-01-15T09:59:59.500Z").unwrap();
        let later = Timestamp::parse("2024-01-15T10:00:00.000Z").unwrap();

        assert!(earlier < later);
        assert!(earlier.to_sortable_string() < later.to_sortable_string());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Timestamp::parse("yesterday").is_err());
    }

    #[test]
    fn serializes_in_sortable_form() {
        let ts = Timestamp::parse("2024-01-15T10:30:00.250123+02:00").unwrap();
        assert_eq!(
            serde_json::to_string(&ts).unwrap(),
            "\"2024-01-15T08:30:00.250Z\""
        );
    }

    #[test]
    fn now_survives_a_json_round_trip_unchanged() {
        let ts = Timestamp::now();
        let back: Timestamp = serde_json::from_str(&serde_json::to_string(&ts).unwrap()).unwrap();
        assert_eq!(ts, back);
    }

    #[test]
    fn timestamp_roundtrips_through_json() {
        let ts = Timestamp::parse("2024-01-15T10:30:00.250Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }
}
