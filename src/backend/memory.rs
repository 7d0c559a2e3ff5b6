use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::backend::{CacheEntry, SharedTier};
use crate::helpers::time::now_i64;

/// In-process shared tier for tests and single-process deployments.
/// Honors the entry TTL on read, like a networked cache would on eviction.
#[derive(Debug, Clone, Default)]
pub struct MemoryTier {
    inner: Arc<RwLock<HashMap<String, Slot>>>,
}

#[derive(Debug, Clone)]
struct Slot {
    entry: CacheEntry,
    evict_at: i64,
}

impl MemoryTier {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SharedTier for MemoryTier {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        let map = self.inner.read().await;
        Ok(map
            .get(key)
            .filter(|slot| now_i64() < slot.evict_at)
            .map(|slot| slot.entry.clone()))
    }

    async fn put(&self, key: &str, entry: &CacheEntry, ttl: Duration) -> Result<()> {
        let mut map = self.inner.write().await;
        map.insert(
            key.to_string(),
            Slot {
                entry: entry.clone(),
                evict_at: now_i64() + ttl.as_secs() as i64,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.inner.write().await.remove(key);
        Ok(())
    }
}
