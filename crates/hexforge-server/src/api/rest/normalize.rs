//! Form-style input normalization
//!
//! The frontend submits unset optional fields as empty strings. These
//! helpers map the empty-string wire value to the absent state before any
//! integer or CR parsing is attempted, so `""` behaves exactly like an
//! omitted field instead of failing type coercion.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

use hexforge_core::Cr;

/// `""` and `null` both mean absent
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrText {
    Int(u32),
    Text(String),
}

/// Optional positive integer that may arrive as a number, a numeric
/// string, or an empty string meaning absent
pub fn empty_as_none_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrText::Int(value)) => Ok(Some(value)),
        Some(IntOrText::Text(text)) if text.is_empty() => Ok(None),
        Some(IntOrText::Text(text)) => text
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid integer: {}", text))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CrOrText {
    Value(Cr),
    Text(String),
}

/// Optional challenge rating where an empty string means absent
pub fn empty_as_none_cr<'de, D>(deserializer: D) -> Result<Option<Cr>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<CrOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(CrOrText::Value(cr)) => Ok(Some(cr)),
        Some(CrOrText::Text(text)) if text.is_empty() => Ok(None),
        Some(CrOrText::Text(text)) => Err(D::Error::custom(format!(
            "invalid challenge rating: {}",
            text
        ))),
    }
}
