//! Null-tolerant field deserialization
//!
//! The intake API sends `null` for attributes that were never filled in.
//! Fields using [`or_default`] read `null` the same as a missing key.

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as `T::default()`
///
/// Pair with `#[serde(default)]` so a missing key is accepted too.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
