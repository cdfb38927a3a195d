//! Mock content store for testing.
//!
//! Provides a configurable [`ContentStore`] double that returns queued
//! results and records how often each operation was called, allowing tests
//! to verify load-once behavior without network access.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::models::{Article, Category};
use crate::traits::{ContentStore, StoreError};

/// A queued result for one list operation.
enum MockResult<T> {
    Success(Vec<T>),
    Failure { status: u16, message: String },
}

impl<T: Clone> MockResult<T> {
    fn to_result(&self) -> Result<Vec<T>, StoreError> {
        match self {
            MockResult::Success(items) => Ok(items.clone()),
            MockResult::Failure { status, message } => Err(StoreError::Status {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// Mock content store for tests.
///
/// Each call pops the next queued result for that operation; an empty queue
/// yields an empty collection. Call counts are recorded for verification.
#[derive(Clone, Default)]
pub struct MockContentStore {
    articles: Arc<Mutex<VecDeque<MockResult<Article>>>>,
    categories: Arc<Mutex<VecDeque<MockResult<Category>>>>,
    article_calls: Arc<AtomicUsize>,
    category_calls: Arc<AtomicUsize>,
}

impl<T> Default for MockResult<T> {
    fn default() -> Self {
        MockResult::Success(Vec::new())
    }
}

impl MockContentStore {
    /// Create a mock with no queued results (every call returns empty).
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful article listing.
    pub fn push_articles(self, articles: Vec<Article>) -> Self {
        self.articles
            .lock()
            .expect("mock lock poisoned")
            .push_back(MockResult::Success(articles));
        self
    }

    /// Queue an article listing failure (HTTP 500).
    pub fn push_article_failure(self, message: &str) -> Self {
        self.articles
            .lock()
            .expect("mock lock poisoned")
            .push_back(MockResult::Failure {
                status: 500,
                message: message.to_string(),
            });
        self
    }

    /// Queue a successful category listing.
    pub fn push_categories(self, categories: Vec<Category>) -> Self {
        self.categories
            .lock()
            .expect("mock lock poisoned")
            .push_back(MockResult::Success(categories));
        self
    }

    /// Queue a category listing failure (HTTP 500).
    pub fn push_category_failure(self, message: &str) -> Self {
        self.categories
            .lock()
            .expect("mock lock poisoned")
            .push_back(MockResult::Failure {
                status: 500,
                message: message.to_string(),
            });
        self
    }

    /// Number of `list_articles` calls made so far.
    pub fn article_calls(&self) -> usize {
        self.article_calls.load(Ordering::SeqCst)
    }

    /// Number of `list_categories` calls made so far.
    pub fn category_calls(&self) -> usize {
        self.category_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for MockContentStore {
    async fn list_articles(&self) -> Result<Vec<Article>, StoreError> {
        self.article_calls.fetch_add(1, Ordering::SeqCst);
        self.articles
            .lock()
            .expect("mock lock poisoned")
            .pop_front()
            .unwrap_or_default()
            .to_result()
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.category_calls.fetch_add(1, Ordering::SeqCst);
        self.categories
            .lock()
            .expect("mock lock poisoned")
            .pop_front()
            .unwrap_or_default()
            .to_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pops_queued_results_in_order() {
        let store = MockContentStore::new()
            .push_article_failure("boom")
            .push_articles(Vec::new());

        assert!(store.list_articles().await.is_err());
        assert!(store.list_articles().await.is_ok());
        assert_eq!(store.article_calls(), 2);
    }

    #[tokio::test]
    async fn empty_queue_yields_empty_collection() {
        let store = MockContentStore::new();
        let categories = store.list_categories().await.unwrap();
        assert!(categories.is_empty());
        assert_eq!(store.category_calls(), 1);
    }
}
