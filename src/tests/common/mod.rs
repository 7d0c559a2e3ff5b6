// tests/common/mod.rs

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::backend::{CacheEntry, SharedTier};
use crate::helpers::time::now_i64;

/// Shared tier that is always unreachable. Exercises degraded, local-only
/// operation.
#[derive(Debug, Clone, Default)]
pub struct FailingTier;

#[async_trait]
impl SharedTier for FailingTier {
    async fn get(&self, _key: &str) -> Result<Option<CacheEntry>> {
        Err(anyhow!("connection refused"))
    }

    async fn put(&self, _key: &str, _entry: &CacheEntry, _ttl: Duration) -> Result<()> {
        Err(anyhow!("connection refused"))
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Err(anyhow!("connection refused"))
    }
}

/// UNIX timestamp `seconds` into the future.
pub fn future_ts(seconds: i64) -> i64 {
    now_i64() + seconds
}
