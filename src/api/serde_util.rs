//! Custom serde helpers for the smart-me wire format.

use serde::{Deserialize, Deserializer};

/// Deserializes `null` into `T::default()`.
///
/// Pair with `#[serde(default)]` so a missing key decodes the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
