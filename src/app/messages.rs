//! AppMessage enum for async communication within the application.

use crate::models::{Article, Category};

/// Messages sent by spawned loader tasks back to the event loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Articles collection fetched successfully (already newest-first)
    ArticlesLoaded(Vec<Article>),
    /// Articles fetch failed
    ArticlesLoadFailed { error: String },
    /// Categories collection fetched successfully
    CategoriesLoaded(Vec<Category>),
    /// Categories fetch failed
    CategoriesLoadFailed { error: String },
}
