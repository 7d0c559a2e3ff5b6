#[cfg(test)]
mod test {

    use std::sync::Arc;

    use crate::backend::memory::MemoryTier;
    use crate::store::token_store::TokenStore;
    use crate::tests::common::future_ts;

    #[tokio::test]
    async fn repopulates_local_tier_from_shared_tier() {
        let shared = Arc::new(MemoryTier::new());

        let first = TokenStore::new(shared.clone());
        first.install("tok-A", future_ts(600)).await.unwrap();

        // simulated process restart: fresh local tier, same shared cache
        let second = TokenStore::new(shared);
        assert_eq!(second.fetch().await.as_deref(), Some("tok-A"));
        assert!(second.is_valid().await);
        assert!(second.remaining_seconds().await > 0);
    }

    #[tokio::test]
    async fn install_propagates_to_other_processes() {
        let shared = Arc::new(MemoryTier::new());
        let writer = TokenStore::new(shared.clone());
        let reader = TokenStore::new(shared.clone());

        writer.install("tok-A", future_ts(600)).await.unwrap();
        assert_eq!(reader.fetch().await.as_deref(), Some("tok-A"));

        // last writer wins in the shared tier
        writer.install("tok-B", future_ts(600)).await.unwrap();
        let fresh = TokenStore::new(shared);
        assert_eq!(fresh.fetch().await.as_deref(), Some("tok-B"));
    }

    #[tokio::test]
    async fn clear_removes_shared_entry_for_other_processes() {
        let shared = Arc::new(MemoryTier::new());
        let writer = TokenStore::new(shared.clone());
        writer.install("tok-A", future_ts(600)).await.unwrap();

        writer.clear().await;
        assert_eq!(writer.fetch().await, None);

        // a process starting after the clear sees nothing
        let fresh = TokenStore::new(shared);
        assert_eq!(fresh.fetch().await, None);
    }
}
