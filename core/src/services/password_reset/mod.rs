//! Password-reset service built on the one-time passcode store
//!
//! This module implements the three-step reset protocol:
//! - Request: look up the account and issue + deliver a reset code
//! - Verify: check a submitted code against the stored record
//! - Reset: consume a verified code and replace the account password
//!
//! Account lookup, password policy and code delivery are collaborator traits
//! implemented by the infrastructure layer.

mod config;
pub mod email_utils;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::PasswordResetServiceConfig;
pub use service::PasswordResetService;
pub use traits::{DeliveryChannelTrait, PasswordPolicyTrait};
pub use types::{ForgotPasswordResponse, ResetPasswordRequest};
