use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::RwLock;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::backend::http::HttpTier;
use crate::backend::{CacheEntry, SharedTier};
use crate::config::settings::StoreConfig;
use crate::helpers::time::now_i64;
use crate::observability::metrics::get_metrics;
use crate::store::credential::Credential;
use crate::store::error::StoreError;
use crate::utils::constants::{DEFAULT_CACHE_KEY, DEFAULT_SHARED_TIMEOUT_MS};

/// Single source of truth for the current bearer credential.
///
/// Two tiers: a process-local holder checked first, and an injected shared
/// cache that propagates the credential to cooperating processes. Safe under
/// concurrent callers; every shared-tier call is bounded by a timeout and
/// degrades to local-only behavior on failure.
#[derive(Clone)]
pub struct TokenStore {
    local: Arc<RwLock<Option<Credential>>>,
    shared: Arc<dyn SharedTier>,
    cache_key: String,
    shared_timeout: Duration,
}

impl TokenStore {
    pub fn new(shared: Arc<dyn SharedTier>) -> Self {
        Self::with_key(
            shared,
            DEFAULT_CACHE_KEY,
            Duration::from_millis(DEFAULT_SHARED_TIMEOUT_MS),
        )
    }

    pub fn with_key(shared: Arc<dyn SharedTier>, cache_key: &str, shared_timeout: Duration) -> Self {
        Self {
            local: Arc::new(RwLock::new(None)),
            shared,
            cache_key: cache_key.to_string(),
            shared_timeout,
        }
    }

    /// Build a store backed by the HTTP cache service from config.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        let shared_timeout = Duration::from_millis(
            config.shared_tier.timeout_ms.unwrap_or(DEFAULT_SHARED_TIMEOUT_MS),
        );
        let shared = HttpTier::new(&config.shared_tier.url, shared_timeout)?;
        Ok(Self::with_key(
            Arc::new(shared),
            config.cache_key.as_deref().unwrap_or(DEFAULT_CACHE_KEY),
            shared_timeout,
        ))
    }

    /// Install a new credential, replacing whatever both tiers held.
    ///
    /// The shared-tier entry TTL equals the remaining lifetime, so the cache
    /// self-evicts in lockstep with logical expiry. A shared-tier failure
    /// leaves the local tier installed and the call succeeds degraded.
    pub async fn install(&self, value: &str, expires_at: i64) -> Result<(), StoreError> {
        let now = now_i64();
        if value.is_empty() {
            return Err(StoreError::EmptyToken);
        }
        if expires_at <= now {
            return Err(StoreError::InvalidExpiry { expires_at, now });
        }

        let credential = Credential::new(value.to_string(), expires_at);
        let remaining_seconds = credential.remaining_seconds();

        {
            let mut slot = self.local.write().await;
            *slot = Some(credential.clone());
        }

        let entry = CacheEntry {
            value: credential.value,
            expires_at,
        };
        let put = self
            .shared
            .put(&self.cache_key, &entry, Duration::from_secs(remaining_seconds));
        match timeout(self.shared_timeout, put).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => self.shared_tier_degraded("install", &err.to_string()).await,
            Err(_) => self.shared_tier_degraded("install", "timeout").await,
        }

        let metrics = get_metrics().await;
        metrics.credential_installs.inc();
        metrics.token_expiry_unix.set(expires_at);
        metrics.token_present.set(1);
        info!(event = "credential_installed", expires_at, remaining_seconds, "credential installed");
        Ok(())
    }

    /// Current credential value, or `None` when absent or expired.
    ///
    /// Fail-safe: an entry whose stored expiry has passed reads as absent
    /// even before the underlying cache physically evicts it. Never fails;
    /// an unreachable shared tier degrades to the local view.
    pub async fn fetch(&self) -> Option<String> {
        self.snapshot().await.map(|credential| credential.value)
    }

    /// True iff a value is fetchable and its expiry is strictly in the future.
    pub async fn is_valid(&self) -> bool {
        self.snapshot().await.is_some()
    }

    /// Seconds until expiry; 0 when absent or already expired.
    pub async fn remaining_seconds(&self) -> u64 {
        self.snapshot()
            .await
            .map(|credential| credential.remaining_seconds())
            .unwrap_or(0)
    }

    /// Empty both tiers unconditionally. Idempotent and total.
    pub async fn clear(&self) {
        {
            let mut slot = self.local.write().await;
            *slot = None;
        }

        let delete = self.shared.delete(&self.cache_key);
        match timeout(self.shared_timeout, delete).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => self.shared_tier_degraded("clear", &err.to_string()).await,
            Err(_) => self.shared_tier_degraded("clear", "timeout").await,
        }

        let metrics = get_metrics().await;
        metrics.credential_clears.inc();
        metrics.token_expiry_unix.set(0);
        metrics.token_present.set(0);
        info!(event = "credential_cleared", "credential cleared");
    }

    /// Two-tier read: local first, shared fill on a local miss.
    ///
    /// An expired local entry falls through to the shared tier, since another
    /// process may have installed a fresher credential there. The stored
    /// expiry is trusted over the backend's physical TTL eviction timing.
    async fn snapshot(&self) -> Option<Credential> {
        let local = { self.local.read().await.clone() };
        match local {
            Some(credential) if !credential.is_expired() => return Some(credential),
            Some(_) => {
                // lazy eviction of the dead entry; re-check under the write
                // lock, a concurrent install may have replaced it
                let mut slot = self.local.write().await;
                if slot.as_ref().map(|c| c.is_expired()).unwrap_or(false) {
                    *slot = None;
                }
            }
            None => {}
        }

        let entry = match timeout(self.shared_timeout, self.shared.get(&self.cache_key)).await {
            Ok(Ok(found)) => found,
            Ok(Err(err)) => {
                self.shared_tier_degraded("fetch", &err.to_string()).await;
                return None;
            }
            Err(_) => {
                self.shared_tier_degraded("fetch", "timeout").await;
                return None;
            }
        }?;

        let credential = Credential::new(entry.value, entry.expires_at);
        if credential.is_expired() {
            return None;
        }

        let mut slot = self.local.write().await;
        *slot = Some(credential.clone());
        debug!(expires_at = credential.expires_at, "local tier repopulated from shared tier");
        Some(credential)
    }

    async fn shared_tier_degraded(&self, op: &str, reason: &str) {
        let metrics = get_metrics().await;
        metrics.shared_tier_failures.with_label_values(&[op]).inc();
        warn!(op, reason, "shared tier unavailable, continuing with local tier only");
    }
}
