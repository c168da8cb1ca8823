//! Configuration for the one-time passcode store

use crate::domain::entities::otp_record::DEFAULT_EXPIRATION_MINUTES;

/// Configuration for the one-time passcode store
#[derive(Debug, Clone)]
pub struct OtpStoreConfig {
    /// Number of minutes before a reset code expires
    pub code_expiration_minutes: i64,
}

impl Default for OtpStoreConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
        }
    }
}
