//! REST adapter for the content store.
//!
//! Speaks the store's PostgREST dialect: collections live under
//! `/rest/v1/<table>` and ordering is requested through the `order` query
//! parameter. The anon API key, when configured, rides along as the
//! `apikey` header on every request.

use async_trait::async_trait;
use reqwest::Client;

use crate::models::{Article, Category};
use crate::traits::{ContentStore, StoreError};

/// Content store client backed by the service's REST endpoint.
#[derive(Debug, Clone)]
pub struct RestContentStore {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl RestContentStore {
    /// Create a client for the store at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            client: Client::new(),
        }
    }

    /// Attach the anon API key sent with every request.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Use a preconfigured reqwest client (timeouts, TLS settings).
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    async fn get_collection<T>(&self, table: &str, order: Option<&str>) -> Result<Vec<T>, StoreError>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut url = format!("{}/rest/v1/{}?select=*", self.base_url, table);
        if let Some(order) = order {
            url.push_str("&order=");
            url.push_str(order);
        }

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some(ref key) = self.api_key {
            request = request.header("apikey", key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::Status { status, message });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ContentStore for RestContentStore {
    async fn list_articles(&self) -> Result<Vec<Article>, StoreError> {
        self.get_collection("articles", Some("created_at.desc")).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.get_collection("categories", None).await
    }
}
