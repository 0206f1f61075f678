use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::error::FetchError;
use crate::types::ContentItem;

/// Something that can produce the full catalog in one call.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<ContentItem>, FetchError>;
}

/// Single GET against a fixed endpoint. No retry, no cache, no paging.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContentSource {
    pub fn new(endpoint: impl Into<String>, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .context("building http client")?;
        Ok(Self { client, endpoint: endpoint.into() })
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_all(&self) -> Result<Vec<ContentItem>, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching catalog");
        let resp = self.client.get(&self.endpoint).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: self.endpoint.clone() });
        }
        // Decode separately so a bad body surfaces as Parse, not Network.
        let body = resp.bytes().await?;
        let items: Vec<ContentItem> = serde_json::from_slice(&body)?;
        Ok(items)
    }
}

/// Fixed in-memory catalog, for offline runs and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticContentSource {
    items: Vec<ContentItem>,
}

impl StaticContentSource {
    pub fn new(items: Vec<ContentItem>) -> Self { Self { items } }

    pub fn from_json(payload: &str) -> Result<Self, FetchError> {
        Ok(Self { items: serde_json::from_str(payload)? })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let payload = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog file: {}", path.display()))?;
        Self::from_json(&payload).with_context(|| format!("parsing catalog file: {}", path.display()))
    }
}

#[async_trait]
impl ContentSource for StaticContentSource {
    async fn fetch_all(&self) -> Result<Vec<ContentItem>, FetchError> { Ok(self.items.clone()) }
}
