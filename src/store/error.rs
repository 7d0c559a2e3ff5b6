use thiserror::Error;

/// Validation errors raised by `install`. Read-side operations are total
/// over all reachable states and never fail the caller; shared-tier
/// unavailability is a logged condition, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("token value must be non-empty")]
    EmptyToken,

    #[error("expiry {expires_at} is not strictly in the future (now {now})")]
    InvalidExpiry { expires_at: i64, now: i64 },
}
