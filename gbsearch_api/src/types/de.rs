//! Field-level deserializers shared by the response records.

use serde::{Deserialize, Deserializer};

/// Reads an optional field, mapping an explicit `null` to the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
