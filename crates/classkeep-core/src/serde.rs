use serde::{Deserialize, Deserializer};

/// Deserializes a list field where `null` means "no entries".
///
/// Pair with `#[serde(default)]` so an absent field behaves the same way.
pub fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
