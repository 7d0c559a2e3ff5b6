use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::backend::{CacheEntry, SharedTier};

/// Client for a networked key-value cache service speaking a minimal REST
/// protocol: `GET`/`PUT`/`DELETE /v1/kv/{key}`, entry TTL in seconds as a
/// `ttl` query parameter on writes, 404 for a missing key.
#[derive(Debug, Clone)]
pub struct HttpTier {
    base_url: String,
    client: Client,
}

impl HttpTier {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn key_url(&self, key: &str) -> String {
        format!("{}/v1/kv/{}", self.base_url, key)
    }
}

#[async_trait]
impl SharedTier for HttpTier {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        let response = self.client.get(self.key_url(key)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(anyhow!("cache GET failed: {}", response.status()));
        }
        Ok(Some(response.json::<CacheEntry>().await?))
    }

    async fn put(&self, key: &str, entry: &CacheEntry, ttl: Duration) -> Result<()> {
        let response = self
            .client
            .put(self.key_url(key))
            .query(&[("ttl", ttl.as_secs())])
            .json(entry)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(anyhow!("cache PUT failed: {}", response.status()));
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let response = self.client.delete(self.key_url(key)).send().await?;
        // a missing key was already gone
        if response.status() == StatusCode::NOT_FOUND || response.status().is_success() {
            return Ok(());
        }
        Err(anyhow!("cache DELETE failed: {}", response.status()))
    }
}
