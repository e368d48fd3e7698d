//! # Temporal Types: UTC Millisecond Timestamps and Date Normalization
//!
//! Defines `Timestamp`, the single comparable instant used by every schedule
//! computation, and the normalizer that turns whatever a data provider hands
//! us into `Option<Timestamp>`.
//!
//! ## Normalization Rules
//!
//! | Input | Result |
//! |-------|--------|
//! | RFC 3339 string, any offset | converted to UTC |
//! | `YYYY-MM-DDTHH:MM[:SS[.fff]]` (no offset) | read as UTC |
//! | `YYYY-MM-DD` | UTC midnight |
//! | epoch milliseconds | as-is, if within chrono's range |
//! | native `DateTime<Utc>` | as-is |
//! | empty / whitespace / unparseable / missing | `None` |
//!
//! All results are truncated to millisecond precision. The normalizer never
//! fails loudly: a bad date is an absent date.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::HxError;

/// Naive date-time layouts accepted by [`Timestamp::parse_flexible()`],
/// tried in order after RFC 3339.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// A UTC timestamp truncated to millisecond precision.
///
/// # Construction
///
/// - [`Timestamp::now()`]: current UTC time.
/// - [`Timestamp::from_utc()`]: from a `DateTime<Utc>`.
/// - [`Timestamp::parse()`]: strict RFC 3339 with `Z` suffix.
/// - [`Timestamp::parse_lenient()`]: RFC 3339 with any offset.
/// - [`Timestamp::parse_flexible()`]: everything the normalizer accepts.
/// - [`Timestamp::from_epoch_millis()`]: from Unix epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to milliseconds.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Wrap a `DateTime<Utc>`, truncating sub-millisecond precision.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_millis(dt))
    }

    /// Parse an RFC 3339 string that uses the `Z` suffix.
    ///
    /// # Errors
    ///
    /// Returns [`HxError::InvalidTimestamp`] if the string is not RFC 3339 or
    /// carries an explicit offset.
    pub fn parse(s: &str) -> Result<Self, HxError> {
        if !s.ends_with('Z') {
            return Err(HxError::InvalidTimestamp(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }
        Self::parse_lenient(s)
    }

    /// Parse an RFC 3339 string with any offset, converting to UTC.
    pub fn parse_lenient(s: &str) -> Result<Self, HxError> {
        let dt = DateTime::parse_from_rfc3339(s.trim()).map_err(|e| {
            HxError::InvalidTimestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Ok(Self::from_utc(dt.with_timezone(&Utc)))
    }

    /// Parse any of the string layouts the normalizer accepts.
    ///
    /// Returns `None` instead of an error; callers that need the reason
    /// should use [`Timestamp::parse_lenient()`].
    pub fn parse_flexible(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self::from_utc(dt.with_timezone(&Utc)));
        }
        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Some(Self::from_utc(naive.and_utc()));
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self::from_utc(naive.and_utc()))
    }

    /// Create a timestamp from Unix epoch milliseconds.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, HxError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| HxError::InvalidTimestamp(format!("epoch millis out of range: {millis}")))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Unix epoch milliseconds.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Subtract a duration, clamping at the earliest representable instant.
    pub fn saturating_sub(&self, duration: Duration) -> Self {
        Self(
            self.0
                .checked_sub_signed(duration)
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        )
    }

    /// Render as RFC 3339 with millisecond fraction and `Z`
    /// (e.g. `2026-01-15T12:00:00.000Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl TryFrom<String> for Timestamp {
    type Error = HxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_lenient(&value)
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.to_iso8601()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_utc(dt)
    }
}

fn truncate_to_millis(dt: DateTime<Utc>) -> DateTime<Utc> {
    let millis_only = (dt.nanosecond() / 1_000_000) * 1_000_000;
    dt.with_nanosecond(millis_only).unwrap_or(dt)
}

// ─── Raw boundary instants ───────────────────────────────────────────

/// A date as supplied by an upstream data provider.
///
/// Deserialized untagged: a JSON/YAML number is epoch milliseconds, a string
/// is free text for [`normalize()`]. `null` is represented by the enclosing
/// `Option`. Any other shape (booleans, arrays, objects) is kept as
/// [`RawInstant::Other`] and normalizes to absent, so one malformed field
/// never rejects the record carrying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInstant {
    /// Unix epoch milliseconds.
    EpochMillis(i64),
    /// Epoch milliseconds written as a float (`1768435200000.0`). The
    /// fractional part is dropped.
    EpochMillisFloat(f64),
    /// A textual date or date-time.
    Text(String),
    /// An in-process date-time value. Serializes as a string, so it reads
    /// back as [`RawInstant::Text`].
    Native(DateTime<Utc>),
    /// A value of no recognized date shape.
    Other(serde_json::Value),
}

impl From<&str> for RawInstant {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<DateTime<Utc>> for RawInstant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Native(dt)
    }
}

impl From<Timestamp> for RawInstant {
    fn from(ts: Timestamp) -> Self {
        Self::Native(*ts.as_datetime())
    }
}

/// Collapse a raw instant to a comparable timestamp, or `None` if it cannot
/// be interpreted. Never panics.
pub fn normalize(input: &RawInstant) -> Option<Timestamp> {
    match input {
        RawInstant::EpochMillis(millis) => Timestamp::from_epoch_millis(*millis).ok(),
        RawInstant::EpochMillisFloat(millis) if millis.is_finite() => {
            Timestamp::from_epoch_millis(millis.trunc() as i64).ok()
        }
        RawInstant::EpochMillisFloat(_) | RawInstant::Other(_) => None,
        RawInstant::Text(text) => Timestamp::parse_flexible(text),
        RawInstant::Native(dt) => Some(Timestamp::from_utc(*dt)),
    }
}

/// [`normalize()`] for an optional field; a missing value is absent.
pub fn normalize_opt(input: Option<&RawInstant>) -> Option<Timestamp> {
    input.and_then(normalize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    // ---- Timestamp ----

    #[test]
    fn test_from_utc_truncates_to_millis() {
        let dt = utc(2026, 1, 15, 12, 30, 45).with_nanosecond(123_456_789).unwrap();
        let ts = Timestamp::from_utc(dt);
        assert_eq!(ts.as_datetime().nanosecond(), 123_000_000);
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:30:45.123Z");
    }

    #[test]
    fn test_parse_strict_rejects_offset() {
        assert!(Timestamp::parse("2026-01-15T12:00:00Z").is_ok());
        assert!(Timestamp::parse("2026-01-15T12:00:00+00:00").is_err());
        assert!(Timestamp::parse("2026-01-15T17:00:00+05:00").is_err());
    }

    #[test]
    fn test_parse_lenient_converts_offset() {
        let ts = Timestamp::parse_lenient("2026-01-15T17:00:00+05:00").unwrap();
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:00:00.000Z");
    }

    #[test]
    fn test_epoch_millis_roundtrip() {
        let ts = Timestamp::parse("2026-01-15T12:00:00.250Z").unwrap();
        let back = Timestamp::from_epoch_millis(ts.epoch_millis()).unwrap();
        assert_eq!(ts, back);
    }

    #[test]
    fn test_epoch_millis_out_of_range() {
        assert!(Timestamp::from_epoch_millis(i64::MAX).is_err());
    }

    #[test]
    fn test_ordering() {
        let earlier = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        let later = Timestamp::parse("2026-01-15T12:00:00.001Z").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_saturating_sub_clamps() {
        let min = Timestamp::from_utc(DateTime::<Utc>::MIN_UTC);
        assert_eq!(min.saturating_sub(Duration::hours(1)), min);
        let noon = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        assert_eq!(
            noon.saturating_sub(Duration::minutes(90)).to_iso8601(),
            "2026-01-15T10:30:00.000Z"
        );
    }

    #[test]
    fn test_serde_uses_iso8601() {
        let ts = Timestamp::parse("2026-06-30T23:59:59Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2026-06-30T23:59:59.000Z\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }

    #[test]
    fn test_serde_rejects_garbage() {
        assert!(serde_json::from_str::<Timestamp>("\"soon\"").is_err());
    }

    // ---- normalize ----

    #[test]
    fn test_normalize_rfc3339() {
        let ts = normalize(&RawInstant::from("2026-03-01T09:00:00Z")).unwrap();
        assert_eq!(ts.as_datetime(), &utc(2026, 3, 1, 9, 0, 0));
    }

    #[test]
    fn test_normalize_naive_datetime_is_utc() {
        let ts = normalize(&RawInstant::from("2026-03-01T09:15")).unwrap();
        assert_eq!(ts.as_datetime(), &utc(2026, 3, 1, 9, 15, 0));
        let ts = normalize(&RawInstant::from("2026-03-01 09:15:30")).unwrap();
        assert_eq!(ts.as_datetime(), &utc(2026, 3, 1, 9, 15, 30));
    }

    #[test]
    fn test_normalize_date_only_is_midnight() {
        let ts = normalize(&RawInstant::from("2026-03-01")).unwrap();
        assert_eq!(ts.as_datetime(), &utc(2026, 3, 1, 0, 0, 0));
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert!(normalize(&RawInstant::from("  2026-03-01T09:00:00Z \n")).is_some());
    }

    #[test]
    fn test_normalize_epoch_and_native() {
        let dt = utc(2026, 3, 1, 9, 0, 0);
        assert_eq!(
            normalize(&RawInstant::EpochMillis(dt.timestamp_millis())),
            Some(Timestamp::from_utc(dt))
        );
        assert_eq!(normalize(&RawInstant::from(dt)), Some(Timestamp::from_utc(dt)));
    }

    #[test]
    fn test_normalize_absent_cases() {
        assert_eq!(normalize(&RawInstant::from("")), None);
        assert_eq!(normalize(&RawInstant::from("   ")), None);
        assert_eq!(normalize(&RawInstant::from("next tuesday")), None);
        assert_eq!(normalize(&RawInstant::from("2026-13-40")), None);
        assert_eq!(normalize(&RawInstant::EpochMillis(i64::MIN)), None);
        assert_eq!(normalize_opt(None), None);
    }

    #[test]
    fn test_raw_instant_deserializes_untagged() {
        let n: RawInstant = serde_json::from_str("1767225600000").unwrap();
        assert_eq!(n, RawInstant::EpochMillis(1_767_225_600_000));
        let s: RawInstant = serde_json::from_str("\"2026-01-01\"").unwrap();
        assert_eq!(s, RawInstant::Text("2026-01-01".into()));
        let missing: Option<RawInstant> = serde_json::from_str("null").unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_float_epoch_is_truncated_to_millis() {
        let f: RawInstant = serde_json::from_str("1768435200000.0").unwrap();
        assert_eq!(f, RawInstant::EpochMillisFloat(1_768_435_200_000.0));
        assert_eq!(
            normalize(&f).map(|ts| ts.epoch_millis()),
            Some(1_768_435_200_000)
        );
        assert_eq!(
            normalize(&RawInstant::EpochMillisFloat(1_768_435_200_000.9)).map(|ts| ts.epoch_millis()),
            Some(1_768_435_200_000)
        );
        assert_eq!(normalize(&RawInstant::EpochMillisFloat(f64::NAN)), None);
        assert_eq!(normalize(&RawInstant::EpochMillisFloat(1e300)), None);
    }

    #[test]
    fn test_unrecognized_shapes_deserialize_as_absent() {
        for json in ["false", "true", "[2026, 1, 1]", r#"{"date": "2026-01-01"}"#] {
            let raw: RawInstant = serde_json::from_str(json).unwrap();
            assert!(matches!(raw, RawInstant::Other(_)), "{json}");
            assert_eq!(normalize(&raw), None, "{json}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Arbitrary text never panics the normalizer.
            #[test]
            fn normalize_text_never_panics(s in ".{0,40}") {
                let _ = normalize(&RawInstant::Text(s));
            }

            /// Arbitrary epoch values never panic and, when accepted, round-trip.
            #[test]
            fn normalize_epoch_roundtrips(ms in any::<i64>()) {
                if let Some(ts) = normalize(&RawInstant::EpochMillis(ms)) {
                    prop_assert_eq!(ts.epoch_millis(), ms);
                }
            }

            /// Rendering then re-normalizing is the identity.
            #[test]
            fn iso8601_renormalizes(ms in -8_000_000_000_000i64..8_000_000_000_000i64) {
                let ts = Timestamp::from_epoch_millis(ms).unwrap();
                prop_assert_eq!(normalize(&RawInstant::Text(ts.to_iso8601())), Some(ts));
            }
        }
    }
}
