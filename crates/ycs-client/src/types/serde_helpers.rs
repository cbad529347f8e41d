//! Deserialization helpers for loosely typed API fields.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserialize, Deserializer};

/// Parse an API timestamp (`2025-01-22T21:52:41Z`).
pub(crate) fn parse_date(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|date| date.with_timezone(&Utc))
}

/// Timestamp field where `null` and `""` mean "not set".
pub(crate) fn date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value).map(Some).map_err(de::Error::custom),
    }
}

/// Field where `null` means the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
