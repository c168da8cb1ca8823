//! Domain entities representing core business objects.

pub mod account;
pub mod otp_record;

// Placeholder for future entity modules
// pub mod listing;
// pub mod media_asset;

// Re-export commonly used types
pub use account::Account;
pub use otp_record::{OtpRecord, CODE_ALPHABET, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};
