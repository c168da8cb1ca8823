//! Business services containing domain logic and use cases.

pub mod otp;
pub mod password_reset;

// Re-export commonly used types
pub use otp::{InMemoryOtpStore, OtpStoreConfig, OtpStoreTrait};
pub use password_reset::{
    DeliveryChannelTrait, ForgotPasswordResponse, PasswordPolicyTrait, PasswordResetService,
    PasswordResetServiceConfig, ResetPasswordRequest,
};

// Placeholder for future service modules
// pub mod listing_service;
// pub mod media_service;
