//! Data model for records served by the content store.
//!
//! The store owns these records; the client only ever holds read-only,
//! in-memory copies obtained per load.

mod article;
mod category;

pub use article::{Article, IMAGE_PLACEHOLDER};
pub use category::Category;

use serde::{Deserialize, Deserializer};

/// Deserialize an identifier that the store may send as a string or integer.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        String(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::String(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Deserialize a string field that the store may send as null.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
