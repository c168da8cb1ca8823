//! One-time passcode record entity for the password-reset flow.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::services::otp::generator::generate_code;

/// Length of a reset code
pub const CODE_LENGTH: usize = 5;

/// Alphabet a reset code is drawn from (digits and upper-case letters)
pub const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default expiration time for reset codes (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

/// One-time passcode record backing a single password-reset request
///
/// At most one live record exists per normalized email address; issuing a
/// new code for the same address replaces the previous record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Normalized email address this code was issued for (the record's key)
    pub email: String,

    /// The 5-character alphanumeric reset code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been successfully verified
    ///
    /// Starts `false` and only ever transitions to `true`; the record is
    /// replaced or removed rather than un-verified.
    pub verified: bool,
}

impl OtpRecord {
    /// Creates a new reset code record with the default expiration
    ///
    /// # Arguments
    ///
    /// * `email` - The normalized email address the code belongs to
    ///
    /// # Returns
    ///
    /// A new `OtpRecord` with a freshly generated 5-character code
    pub fn new(email: String) -> Self {
        Self::new_with_expiration(email, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new reset code record with a custom expiration time
    ///
    /// # Arguments
    ///
    /// * `email` - The normalized email address the code belongs to
    /// * `expiration_minutes` - Number of minutes until the code expires
    pub fn new_with_expiration(email: String, expiration_minutes: i64) -> Self {
        let now = Utc::now();

        Self {
            email,
            code: generate_code(),
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            verified: false,
        }
    }

    /// Checks if the reset code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks whether a submitted code matches this record's code
    ///
    /// The comparison is exact-length and ASCII case-insensitive, so a code
    /// issued as `A1B2C` is accepted as `a1b2c`. Expiry is not checked here;
    /// callers gate on [`OtpRecord::is_expired`] first.
    pub fn matches(&self, input_code: &str) -> bool {
        input_code.len() == self.code.len() && self.code.eq_ignore_ascii_case(input_code)
    }

    /// Marks the record as verified
    ///
    /// `verified` is monotonic: there is no inverse operation.
    pub fn mark_verified(&mut self) {
        self.verified = true;
    }

    /// Gets the time remaining until expiration, or zero if already expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
