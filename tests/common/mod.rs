//! Common test utilities for integration tests.
//!
//! Provides record fixtures and a builder that wires an [`App`] to a
//! preconfigured [`MockContentStore`].

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use gids::adapters::MockContentStore;
use gids::app::App;
use gids::models::{Article, Category};
use gids::traits::ContentStore;

/// An article fixture with a deterministic timestamp, `days_ago` days
/// before 2026-01-30.
pub fn sample_article(id: &str, title: &str, days_ago: i64) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: format!("{} in het kort", title),
        content: format!("<p>{}</p>", title),
        author: "Jan de Vries".to_string(),
        category: "Reizen".to_string(),
        read_time: "5 min".to_string(),
        image_url: None,
        created_at: Utc.with_ymd_and_hms(2026, 1, 30, 12, 0, 0).unwrap() - Duration::days(days_ago),
    }
}

/// A category fixture with optional subcategory labels.
pub fn sample_category(id: &str, name: &str, subcategories: &[&str]) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        subcategories: if subcategories.is_empty() {
            None
        } else {
            Some(subcategories.iter().map(|s| s.to_string()).collect())
        },
    }
}

/// Three articles, newest first, the way the store returns them.
pub fn sample_articles() -> Vec<Article> {
    vec![
        sample_article("a1", "Voorbeeld", 0),
        sample_article("a2", "Fietsen door Utrecht", 1),
        sample_article("a3", "Stroopwafels proeven", 2),
    ]
}

/// Builder for creating test App instances wired to a mock store.
#[derive(Default)]
pub struct TestAppBuilder {
    store: MockContentStore,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful article listing.
    pub fn with_articles(mut self, articles: Vec<Article>) -> Self {
        self.store = self.store.push_articles(articles);
        self
    }

    /// Queue an article listing failure.
    pub fn with_article_failure(mut self) -> Self {
        self.store = self.store.push_article_failure("internal error");
        self
    }

    /// Queue a successful category listing.
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.store = self.store.push_categories(categories);
        self
    }

    /// Queue a category listing failure.
    pub fn with_category_failure(mut self) -> Self {
        self.store = self.store.push_category_failure("internal error");
        self
    }

    /// Build the App, keeping a handle to the mock for call assertions.
    pub fn build_with_store(self) -> (App, MockContentStore) {
        let store = self.store.clone();
        let app = App::new(Arc::new(self.store) as Arc<dyn ContentStore>);
        (app, store)
    }

    pub fn build(self) -> App {
        self.build_with_store().0
    }
}

/// Drain loader messages until both collections have settled.
pub async fn settle_loaders(app: &mut App) {
    let mut rx = app.message_rx.take().expect("message receiver already taken");
    while !(app.articles.is_settled() && app.categories.is_settled()) {
        let message = rx.recv().await.expect("loader channel closed early");
        app.handle_message(message);
    }
    app.message_rx = Some(rx);
}
