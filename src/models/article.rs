use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_nullable_string};

/// Image reference rendered when an article has none of its own.
pub const IMAGE_PLACEHOLDER: &str = "/api/placeholder/800/400";

/// An article record from the content store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    /// Unique, stable identifier (the store may send it as string or integer)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    /// Short teaser shown on the home screen card
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub excerpt: String,
    /// Full body as trusted markup. Rendered verbatim; sanitization is the
    /// store's responsibility.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub content: String,
    /// Author display name
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub author: String,
    /// Category label (display only, not a relation)
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub category: String,
    /// Estimated read time, e.g. "5 min"
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub read_time: String,
    /// Header image, if the article has one
    #[serde(default)]
    pub image_url: Option<String>,
    /// Creation time; drives display formatting and the default ordering
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// The image reference to render, falling back to the placeholder.
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(IMAGE_PLACEHOLDER)
    }
}
