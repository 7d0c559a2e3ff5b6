use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http;
pub mod memory;

/// One shared-tier entry. Value and expiry travel as a single document so a
/// reader can never observe one without the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub value: String,
    pub expires_at: i64,
}

/// Contract for the shared cache tier: per-key read-after-write consistency
/// and TTL-based entry eviction. No cross-key transactions are assumed.
#[async_trait]
pub trait SharedTier: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>>;

    /// Store `entry` under `key` with the given time-to-live.
    async fn put(&self, key: &str, entry: &CacheEntry, ttl: Duration) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
