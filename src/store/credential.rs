use crate::helpers::time::now_i64;

/// Bearer credential: opaque token value plus absolute expiry (UNIX seconds, UTC).
/// The value is never parsed or inspected by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub value: String,
    pub expires_at: i64,
}

impl Credential {
    pub fn new(value: String, expires_at: i64) -> Self {
        Self { value, expires_at }
    }

    /// Expired once the current time reaches `expires_at`.
    pub fn is_expired(&self) -> bool {
        now_i64() >= self.expires_at
    }

    /// Seconds left before expiry, never negative.
    pub fn remaining_seconds(&self) -> u64 {
        (self.expires_at - now_i64()).max(0) as u64
    }
}
