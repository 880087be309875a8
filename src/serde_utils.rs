//! Serde helpers shared by request DTOs.

use serde::{Deserialize, Deserializer};

/// Keep an explicit `null` apart from a missing field.
///
/// Pair with `#[serde(default)]`: a missing field never reaches this
/// function and stays `None`, `null` becomes `Some(None)` and a value
/// becomes `Some(Some(value))`.
pub fn nullable<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
