//! `deserialize_with` helpers that normalize request fields on the way in.
//!
//! Combine with `#[serde(default)]` so a missing field reaches the
//! `validator` rules as an empty string instead of a serde error.

use serde::{Deserialize, Deserializer};

use crate::domain::normalize_email;

/// Trim surrounding whitespace
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Trim and lower-case an email address
pub fn email<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(normalize_email(&value))
}

/// Trim an optional string; blank becomes `None`
pub fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}
