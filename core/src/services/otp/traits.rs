//! Store contract for one-time passcode records

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Contract for the keyed, expiring reset-code store
///
/// Keys are normalized (trimmed, lower-cased) email addresses; every
/// operation normalizes its input before touching storage, so callers may
/// pass addresses in any case.
///
/// Absence, expiry and mismatch are expected outcomes and are signalled via
/// the boolean returns, never via `Err`. Errors are reserved for backing
/// store failures, which the in-memory implementation cannot produce but a
/// networked one (e.g. Redis) can.
#[async_trait]
pub trait OtpStoreTrait: Send + Sync {
    /// Issue a fresh reset code for an email address
    ///
    /// Unconditionally replaces any existing record for the same address, so
    /// at most one code is live per identity. Expired records for *other*
    /// addresses are swept opportunistically as part of this call.
    ///
    /// Returns the generated code so the caller can hand it to a delivery
    /// channel.
    async fn issue(&self, email: &str) -> DomainResult<String>;

    /// Check a submitted code against the stored record
    ///
    /// Returns `Ok(false)` when no record exists, the record has expired
    /// (the dead record is deleted as part of the call), or the code does
    /// not match case-insensitively. On a match the record is marked
    /// verified and `Ok(true)` is returned.
    async fn verify(&self, email: &str, code: &str) -> DomainResult<bool>;

    /// Whether the record for an email address has been verified
    ///
    /// Returns `Ok(false)` when no live record exists.
    async fn is_verified(&self, email: &str) -> DomainResult<bool>;

    /// Delete any record for an email address
    ///
    /// Idempotent: removing an absent record is not an error.
    async fn remove(&self, email: &str) -> DomainResult<()>;
}
