//! Shared constants and invariants

pub const DEFAULT_CACHE_KEY: &str = "credential/current";
pub const DEFAULT_SHARED_TIMEOUT_MS: u64 = 2000;
