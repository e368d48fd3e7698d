//! Field-level deserializers for `#[serde(deserialize_with = "...")]` on
//! provider records. A field of the wrong shape reads as its default instead
//! of failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// `None` when the value is missing, `null`, or of the wrong shape.
pub(crate) fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// `T::default()` when the value is `null` or of the wrong shape.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
