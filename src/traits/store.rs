//! Content store trait abstraction.
//!
//! The remote data collaborator exposes exactly two read operations. The
//! client is read-only against the store: no writes, no single-record
//! fetches. Implementations include the production REST client and a mock
//! for tests.

use async_trait::async_trait;

use crate::models::{Article, Category};

/// Errors returned by content store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The store answered with a non-success status
    #[error("store returned status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body was not the expected shape
    #[error("failed to decode store response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read-only access to the remote article store.
///
/// Both operations return complete collections in the store's ordering:
/// articles descending by creation time, categories in store order. A failed
/// call carries no partial data.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// List all articles, newest first.
    async fn list_articles(&self) -> Result<Vec<Article>, StoreError>;

    /// List all categories in store order.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
}
