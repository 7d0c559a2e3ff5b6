use prometheus::{IntCounter, IntCounterVec, IntGauge, Opts, Registry};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the static `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE
        .get_or_init(|| async {
            info!("Initializing Metrics ...");
            Metrics::new()
        })
        .await
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Store lifecycle
    pub credential_installs: IntCounter,
    pub credential_clears: IntCounter,

    // Shared tier health
    pub shared_tier_failures: IntCounterVec,

    // Current credential
    pub token_expiry_unix: IntGauge,
    pub token_present: IntGauge,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("credstore".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            credential_installs: IntCounter::new("credential_installs_total", "Total credential installs").unwrap(),
            credential_clears: IntCounter::new("credential_clears_total", "Total credential clears").unwrap(),

            shared_tier_failures: IntCounterVec::new(Opts::new("shared_tier_failures_total", "Shared tier failures by operation"), &["op"]).unwrap(),

            token_expiry_unix: IntGauge::new("token_expiry_unix_seconds", "Current credential expiry timestamp").unwrap(),
            token_present: IntGauge::new("token_present", "1 if a credential is installed in the local tier").unwrap(),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.credential_installs.clone())).unwrap();
        reg.register(Box::new(metrics.credential_clears.clone())).unwrap();
        reg.register(Box::new(metrics.shared_tier_failures.clone())).unwrap();
        reg.register(Box::new(metrics.token_expiry_unix.clone())).unwrap();
        reg.register(Box::new(metrics.token_present.clone())).unwrap();

        metrics
    }
}
