//! Configuration for the password-reset service

/// Configuration for the password-reset service
#[derive(Debug, Clone)]
pub struct PasswordResetServiceConfig {
    /// Acknowledgment returned by the request step
    ///
    /// The same text is used whether or not an account exists for the
    /// address, so the response never discloses registration status.
    pub request_ack_message: String,
}

impl Default for PasswordResetServiceConfig {
    fn default() -> Self {
        Self {
            request_ack_message: String::from(
                "If an account exists for this email address, a reset code has been sent.",
            ),
        }
    }
}
