#[cfg(test)]
mod test {

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::anyhow;

    use crate::backend::memory::MemoryTier;
    use crate::store::refresh::RefreshGate;
    use crate::store::token_store::TokenStore;
    use crate::tests::common::future_ts;

    #[tokio::test]
    async fn concurrent_callers_trigger_one_login() {
        let store = TokenStore::new(Arc::new(MemoryTier::new()));
        let gate = Arc::new(RefreshGate::new());
        let logins = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            let gate = gate.clone();
            let logins = logins.clone();
            handles.push(tokio::spawn(async move {
                gate.fetch_or_refresh(&store, move || async move {
                    logins.fetch_add(1, Ordering::SeqCst);
                    // widen the race window
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok(("tok-single".to_string(), future_ts(600)))
                })
                .await
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "tok-single");
        }
        assert_eq!(logins.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn valid_credential_short_circuits_login() {
        let store = TokenStore::new(Arc::new(MemoryTier::new()));
        let gate = RefreshGate::new();
        let logins = Arc::new(AtomicUsize::new(0));

        store.install("tok-A", future_ts(600)).await.unwrap();

        let counter = logins.clone();
        let value = gate
            .fetch_or_refresh(&store, move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(("tok-B".to_string(), future_ts(600)))
            })
            .await
            .unwrap();

        assert_eq!(value, "tok-A");
        assert_eq!(logins.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn login_failure_propagates_and_store_stays_empty() {
        let store = TokenStore::new(Arc::new(MemoryTier::new()));
        let gate = RefreshGate::new();

        let result = gate
            .fetch_or_refresh(&store, || async {
                Err::<(String, i64), _>(anyhow!("upstream login rejected"))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(store.fetch().await, None);
    }
}
