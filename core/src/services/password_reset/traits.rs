//! Traits for delivery-channel and password-policy integration

use async_trait::async_trait;

/// Trait for out-of-band delivery of reset codes (email, SMS, ...)
///
/// Delivery is best-effort from the protocol's perspective: the service logs
/// failures and carries on, and the issued code stays valid regardless of
/// delivery outcome.
#[async_trait]
pub trait DeliveryChannelTrait: Send + Sync {
    /// Deliver a reset code to an address, returning a provider message id
    async fn deliver(&self, email: &str, code: &str) -> Result<String, String>;
}

/// Trait for the password strength policy
pub trait PasswordPolicyTrait: Send + Sync {
    /// Validate a candidate password
    ///
    /// Returns the list of violated rules; an empty list means the password
    /// is acceptable.
    fn validate(&self, candidate: &str) -> Vec<String>;
}
