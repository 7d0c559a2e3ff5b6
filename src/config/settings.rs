use serde::Deserialize;

/// ================================
/// Store-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// shared-tier key the credential lives under
    pub cache_key: Option<String>,
    pub shared_tier: SharedTierConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SharedTierConfig {
    pub url: String,
    /// bound on every shared-tier call; an operation degrades to the
    /// local tier once it elapses
    pub timeout_ms: Option<u64>,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}
