//! One-time passcode store for the password-reset flow
//!
//! This module provides the keyed, expiring storage behind reset codes:
//! - Code generation and issuance (one live code per email address)
//! - Case-insensitive verification with a monotonic verified flag
//! - Single-use consumption via removal
//! - Lazy eviction of expired records on issuance
//!
//! The store contract is a trait so a clustered deployment can swap the
//! per-process map for an external expiring key-value service.

mod config;
pub(crate) mod generator;
mod store;
mod traits;

#[cfg(test)]
mod tests;

pub use config::OtpStoreConfig;
pub use store::InMemoryOtpStore;
pub use traits::OtpStoreTrait;
