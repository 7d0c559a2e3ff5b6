use crate::config::settings::StoreConfig;
use crate::utils::constants::{DEFAULT_CACHE_KEY, DEFAULT_SHARED_TIMEOUT_MS};
use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

/// Load and validate config from YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<StoreConfig> {
    let raw = fs::read_to_string(path)?;
    let mut config: StoreConfig = serde_yaml::from_str(&raw)?;

    // Apply defaults
    if config.cache_key.is_none() {
        config.cache_key = Some(DEFAULT_CACHE_KEY.into());
    }
    if config.shared_tier.timeout_ms.is_none() {
        config.shared_tier.timeout_ms = Some(DEFAULT_SHARED_TIMEOUT_MS);
    }

    // Validate shared tier
    if config.shared_tier.url.is_empty() {
        bail!("shared_tier.url must not be empty");
    }
    if config.shared_tier.timeout_ms == Some(0) {
        bail!("shared_tier.timeout_ms must be greater than zero");
    }

    Ok(config)
}
