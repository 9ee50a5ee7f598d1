// Deserialization helpers for GraphQL-nullable fields
use serde::{Deserialize, Deserializer};

/// A nullable list field: `null` and an absent key both become `[]`.
///
/// Use together with `#[serde(default)]` so the absent case never reaches
/// the deserializer.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
