//! Error types for the password-reset flow and input validation
//!
//! This module provides the error type definitions for the reset protocol and
//! request validation. The actual user-facing copy is configured in the
//! presentation layer; these messages are for operators and logs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Password-reset errors
///
/// `InvalidOrExpiredCode` deliberately covers "no pending code", "expired
/// code" and "wrong code" with a single message so the response does not leak
/// whether an address ever requested a reset.
#[derive(Error, Debug)]
pub enum PasswordResetError {
    #[error("Invalid or expired reset code")]
    InvalidOrExpiredCode,

    #[error("Password confirmation does not match")]
    PasswordMismatch,

    #[error("Password does not meet requirements: {}", .violations.join("; "))]
    WeakPassword { violations: Vec<String> },

    #[error("Account not found")]
    AccountNotFound,

    #[error("Delivery channel failure")]
    DeliveryFailure,
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length: {field} (expected: {expected}, actual: {actual})")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid email")]
    InvalidEmail,
}

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add details to the error response
    pub fn with_details(mut self, details: HashMap<String, serde_json::Value>) -> Self {
        self.details = Some(details);
        self
    }

    /// Add a single detail to the error response
    pub fn with_detail(mut self, key: impl ToString, value: serde_json::Value) -> Self {
        let mut details = self.details.unwrap_or_default();
        details.insert(key.to_string(), value);
        self.details = Some(details);
        self
    }
}

/// Convert PasswordResetError to ErrorResponse
impl From<PasswordResetError> for ErrorResponse {
    fn from(err: PasswordResetError) -> Self {
        let error_code = match &err {
            PasswordResetError::InvalidOrExpiredCode => "INVALID_OR_EXPIRED_CODE",
            PasswordResetError::PasswordMismatch => "PASSWORD_MISMATCH",
            PasswordResetError::WeakPassword { .. } => "WEAK_PASSWORD",
            PasswordResetError::AccountNotFound => "ACCOUNT_NOT_FOUND",
            PasswordResetError::DeliveryFailure => "DELIVERY_FAILURE",
        };

        let mut response = ErrorResponse::new(error_code, err.to_string());
        if let PasswordResetError::WeakPassword { violations } = &err {
            response = response.with_detail("violations", serde_json::json!(violations));
        }
        response
    }
}

/// Convert ValidationError to ErrorResponse
impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let error_code = match &err {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::InvalidLength { .. } => "INVALID_LENGTH",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
