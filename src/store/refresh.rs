use std::future::Future;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::debug;

use crate::store::token_store::TokenStore;

/// Single-flight gate around credential refresh.
///
/// When many concurrent callers discover the store empty or expired at the
/// same time, exactly one runs the login call; the rest wait on the gate and
/// pick up the installed result instead of each re-authenticating.
#[derive(Default)]
pub struct RefreshGate {
    gate: Mutex<()>,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored value if fetchable, otherwise run `login` (yielding
    /// the new value and its absolute expiry) under the gate and install its
    /// result. A login failure propagates to the caller that ran it.
    pub async fn fetch_or_refresh<F, Fut>(&self, store: &TokenStore, login: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(String, i64)>>,
    {
        if let Some(value) = store.fetch().await {
            return Ok(value);
        }

        let _guard = self.gate.lock().await;

        // a concurrent caller may have refreshed while we waited on the gate
        if let Some(value) = store.fetch().await {
            debug!("refresh already performed by a concurrent caller");
            return Ok(value);
        }

        let (value, expires_at) = login().await?;
        store.install(&value, expires_at).await?;
        Ok(value)
    }
}
