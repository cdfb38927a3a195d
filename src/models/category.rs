use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_nullable_string};

/// A navigational category shown in the sidebar.
///
/// Subcategories are display-only labels; they carry no relation to
/// [`Article`](super::Article) and never filter the article list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    /// Indented menu items under the category name; absent renders nothing
    #[serde(default)]
    pub subcategories: Option<Vec<String>>,
}
