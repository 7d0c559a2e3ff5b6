//! # Credential Store Library
//!
//! Lifecycle manager for the single bearer credential used by outbound
//! API requests: holds the token and its absolute expiry, serves it to
//! concurrent callers, and keeps cooperating processes consistent through
//! a shared cache tier.
//!
//! Modules:
//! - `store` — the two-tier token store, error taxonomy and refresh gate
//! - `backend` — pluggable shared-tier cache backends (in-memory, HTTP)
//! - `config` — store configuration and YAML loader
//! - `observability` — prometheus metrics for installs, clears and tier health

pub mod backend;
pub mod config;
pub mod helpers;
pub mod observability;
pub mod store;
pub mod tests;
pub mod utils;

pub use crate::store::credential::Credential;
pub use crate::store::error::StoreError;
pub use crate::store::refresh::RefreshGate;
pub use crate::store::token_store::TokenStore;
