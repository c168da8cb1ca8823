//! In-memory implementation of the reset-code store

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::otp_record::OtpRecord;
use crate::errors::DomainResult;
use crate::services::password_reset::email_utils::mask_email;

use super::config::OtpStoreConfig;
use super::traits::OtpStoreTrait;

/// Process-wide, in-memory reset-code store
///
/// A single `Mutex<HashMap>` keyed by normalized email address. The lock is
/// held only for the map operation itself; no I/O and no `.await` ever
/// happens under it, so concurrently executing request handlers contend only
/// for the microseconds the map mutation takes.
///
/// State is deliberately ephemeral: a process restart drops all outstanding
/// codes, which the 10-minute TTL makes an acceptable trade-off. Clustered
/// deployments need an external expiring key-value store behind the same
/// [`OtpStoreTrait`] contract instead.
pub struct InMemoryOtpStore {
    records: Mutex<HashMap<String, OtpRecord>>,
    config: OtpStoreConfig,
}

impl InMemoryOtpStore {
    /// Create a new store with the given configuration
    pub fn new(config: OtpStoreConfig) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Normalize an email address into its storage key
    fn normalize_key(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Number of records currently held, expired or not
    ///
    /// Exposed for tests and operational metrics; not part of the store
    /// contract.
    pub fn len(&self) -> usize {
        self.records.lock().expect("otp store lock poisoned").len()
    }

    /// Whether the store currently holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryOtpStore {
    fn default() -> Self {
        Self::new(OtpStoreConfig::default())
    }
}

#[async_trait]
impl OtpStoreTrait for InMemoryOtpStore {
    async fn issue(&self, email: &str) -> DomainResult<String> {
        let key = Self::normalize_key(email);
        let record = OtpRecord::new_with_expiration(key.clone(), self.config.code_expiration_minutes);
        let code = record.code.clone();

        {
            let mut records = self.records.lock().expect("otp store lock poisoned");

            // Sweep-on-write: issuance traffic is the eviction schedule, so
            // memory stays bounded by recent issuance volume without a timer.
            let now = Utc::now();
            records.retain(|_, r| r.expires_at >= now);

            // Overwrite replaces any prior record for the same address,
            // invalidating its code.
            records.insert(key.clone(), record);
        }

        tracing::info!(
            email = %mask_email(&key),
            event = "reset_code_issued",
            "Issued new password reset code"
        );

        Ok(code)
    }

    async fn verify(&self, email: &str, code: &str) -> DomainResult<bool> {
        let key = Self::normalize_key(email);

        let matched = {
            let mut records = self.records.lock().expect("otp store lock poisoned");

            match records.get_mut(&key) {
                None => false,
                Some(record) if record.is_expired() => {
                    // Logically dead already; drop the corpse now.
                    records.remove(&key);
                    false
                }
                Some(record) => {
                    if record.matches(code) {
                        record.mark_verified();
                        true
                    } else {
                        false
                    }
                }
            }
        };

        if matched {
            tracing::info!(
                email = %mask_email(&key),
                event = "reset_code_verified",
                "Password reset code verified"
            );
        } else {
            tracing::warn!(
                email = %mask_email(&key),
                event = "reset_code_rejected",
                "Password reset code rejected (missing, expired, or wrong)"
            );
        }

        Ok(matched)
    }

    async fn is_verified(&self, email: &str) -> DomainResult<bool> {
        let key = Self::normalize_key(email);
        let records = self.records.lock().expect("otp store lock poisoned");

        Ok(records
            .get(&key)
            .map(|record| !record.is_expired() && record.verified)
            .unwrap_or(false))
    }

    async fn remove(&self, email: &str) -> DomainResult<()> {
        let key = Self::normalize_key(email);
        let removed = {
            let mut records = self.records.lock().expect("otp store lock poisoned");
            records.remove(&key).is_some()
        };

        if removed {
            tracing::info!(
                email = %mask_email(&key),
                event = "reset_code_removed",
                "Password reset code removed"
            );
        }

        Ok(())
    }
}
