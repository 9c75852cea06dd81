//! Wire timestamps.
//!
//! The API emits RFC 3339 timestamps, but rows read straight from the
//! database come back in Postgres text form: a space between date and time
//! and a bare `+00` offset, e.g. `2025-12-11 08:25:10.144334+00`. Both are
//! accepted and normalized to UTC.

use chrono::{DateTime, SecondsFormat, Utc};

/// Parse a wire timestamp.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let mut normalized = value.replacen(' ', "T", 1);
    if normalized.ends_with("+00") {
        normalized.push_str(":00");
    }
    DateTime::parse_from_rfc3339(&normalized).map(|dt| dt.with_timezone(&Utc))
}

/// Format a timestamp the way the API emits it.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Serde adapter for required timestamp fields.
pub(crate) mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw)
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
    }
}

/// Serde adapter for optional timestamp fields. Use with `#[serde(default)]`.
pub(crate) mod timestamp_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&super::format_timestamp(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse_timestamp(&raw)
                .map(Some)
                .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{raw}': {e}"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_text_form_matches_rfc3339() {
        let pg = parse_timestamp("2025-12-11 08:25:10.144334+00").unwrap();
        let iso = parse_timestamp("2025-12-11T08:25:10.144334+00:00").unwrap();
        assert_eq!(pg, iso);
    }

    #[test]
    fn test_zulu_and_offsets() {
        let z = parse_timestamp("2025-12-11T08:25:10Z").unwrap();
        let shifted = parse_timestamp("2025-12-11T10:25:10+02:00").unwrap();
        assert_eq!(z, shifted);
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("2025-12-11").is_err());
        assert!(parse_timestamp("2025-12-11T08:25:10").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_format_is_parseable() {
        let dt = parse_timestamp("2025-12-11 08:25:10.144334+00").unwrap();
        let text = format_timestamp(&dt);
        assert_eq!(text, "2025-12-11T08:25:10.144334Z");
        assert_eq!(parse_timestamp(&text).unwrap(), dt);
    }
}
