//! Types for password-reset protocol requests and results

use serde::{Deserialize, Serialize};

/// Acknowledgment returned by the request-reset step
///
/// Identical in shape and content whether or not the address maps to an
/// account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordResponse {
    /// Generic acknowledgment message
    pub message: String,
}

/// Input to the reset (consumption) step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    /// Email address the code was issued for
    pub email: String,
    /// The submitted reset code
    pub code: String,
    /// Replacement password
    pub new_password: String,
    /// Confirmation of the replacement password
    pub confirm_password: String,
}
