//! Main password-reset service implementation

use std::sync::Arc;

use crate::domain::entities::otp_record::CODE_LENGTH;
use crate::errors::{DomainResult, PasswordResetError, ValidationError};
use crate::repositories::AccountRepository;
use crate::services::otp::OtpStoreTrait;

use super::config::PasswordResetServiceConfig;
use super::email_utils::{is_valid_email, mask_email, normalize_email};
use super::traits::{DeliveryChannelTrait, PasswordPolicyTrait};
use super::types::{ForgotPasswordResponse, ResetPasswordRequest};

/// Password-reset service orchestrating the three-step reset protocol
///
/// The service owns no state of its own; reset-code state lives in the
/// [`OtpStoreTrait`] implementation and account state behind the
/// [`AccountRepository`].
pub struct PasswordResetService<A, O, D, P>
where
    A: AccountRepository,
    O: OtpStoreTrait,
    D: DeliveryChannelTrait,
    P: PasswordPolicyTrait,
{
    /// Account repository for lookup and password update
    account_repository: Arc<A>,
    /// Store holding outstanding reset codes
    otp_store: Arc<O>,
    /// Channel that carries codes to the user out of band
    delivery_channel: Arc<D>,
    /// Password strength policy
    password_policy: Arc<P>,
    /// Service configuration
    config: PasswordResetServiceConfig,
}

impl<A, O, D, P> PasswordResetService<A, O, D, P>
where
    A: AccountRepository,
    O: OtpStoreTrait,
    D: DeliveryChannelTrait,
    P: PasswordPolicyTrait,
{
    /// Create a new password-reset service
    ///
    /// # Arguments
    ///
    /// * `account_repository` - Repository for account lookup and update
    /// * `otp_store` - Store for outstanding reset codes
    /// * `delivery_channel` - Out-of-band code delivery
    /// * `password_policy` - Strength policy for replacement passwords
    /// * `config` - Service configuration
    pub fn new(
        account_repository: Arc<A>,
        otp_store: Arc<O>,
        delivery_channel: Arc<D>,
        password_policy: Arc<P>,
        config: PasswordResetServiceConfig,
    ) -> Self {
        Self {
            account_repository,
            otp_store,
            delivery_channel,
            password_policy,
            config,
        }
    }

    /// Request a password reset for an email address
    ///
    /// This method:
    /// 1. Normalizes and validates the address
    /// 2. Looks the account up
    /// 3. For a known account, issues a code and hands it to the delivery
    ///    channel (fire-and-forget: delivery failure is absorbed)
    /// 4. Returns one generic acknowledgment for both branches
    ///
    /// The response must never disclose whether the address is registered;
    /// both branches exit through the single ack constructed at the end.
    ///
    /// # Arguments
    ///
    /// * `email` - The address to send a reset code to
    ///
    /// # Returns
    ///
    /// * `Ok(ForgotPasswordResponse)` - The generic acknowledgment
    /// * `Err(DomainError)` - If the input is malformed or the lookup fails
    pub async fn forgot_password(&self, email: &str) -> DomainResult<ForgotPasswordResponse> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        if let Some(account) = self.account_repository.find_by_email(&email).await? {
            let code = self.otp_store.issue(&email).await?;

            match self.delivery_channel.deliver(&account.email, &code).await {
                Ok(message_id) => {
                    tracing::info!(
                        email = %mask_email(&email),
                        message_id = %message_id,
                        event = "reset_code_delivered",
                        "Handed reset code to delivery channel"
                    );
                }
                Err(e) => {
                    // Absorbed: the code stays valid and the caller still
                    // receives the generic acknowledgment. Support can read
                    // the issuance event and assist through another channel.
                    tracing::warn!(
                        email = %mask_email(&email),
                        error = %e,
                        event = "reset_code_delivery_failed",
                        "Delivery channel failed; reset code remains valid"
                    );
                }
            }
        } else {
            tracing::info!(
                email = %mask_email(&email),
                event = "reset_requested_unknown_email",
                "Password reset requested for unregistered email"
            );
        }

        // Single construction point for the acknowledgment keeps the two
        // branches textually identical.
        Ok(ForgotPasswordResponse {
            message: self.config.request_ack_message.clone(),
        })
    }

    /// Verify a submitted reset code
    ///
    /// Malformed input is rejected before the store is consulted. A code
    /// that the store rejects collapses to the single
    /// [`PasswordResetError::InvalidOrExpiredCode`], which does not reveal
    /// whether a code was ever issued for the address.
    ///
    /// # Arguments
    ///
    /// * `email` - The address the code was issued for
    /// * `code` - The submitted code, any character case
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Code accepted; the stored record is now verified
    /// * `Err(DomainError)` - Malformed input or rejected code
    pub async fn verify_reset_code(&self, email: &str, code: &str) -> DomainResult<()> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }
        let code = Self::validate_code_format(code)?;

        if self.otp_store.verify(&email, &code).await? {
            Ok(())
        } else {
            Err(PasswordResetError::InvalidOrExpiredCode.into())
        }
    }

    /// Reset an account password using a verified code
    ///
    /// Preconditions are checked in a fixed order, each with its own error:
    /// field presence, code format, code authorization (prior verify or
    /// inline fallback verify), password confirmation, password policy, and
    /// finally account existence. On success the password is replaced and
    /// the code is consumed; it can never be used again.
    ///
    /// The explicit `AccountNotFound` at the last step is deliberate: the
    /// caller has already proven possession of a valid code, so account
    /// existence is no longer a secret at this stage.
    ///
    /// # Arguments
    ///
    /// * `request` - Email, code, and new password with confirmation
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Password replaced, code consumed
    /// * `Err(DomainError)` - First violated precondition, in order
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> DomainResult<()> {
        for (field, value) in [
            ("email", &request.email),
            ("code", &request.code),
            ("new_password", &request.new_password),
            ("confirm_password", &request.confirm_password),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::RequiredField {
                    field: field.to_string(),
                }
                .into());
            }
        }

        let email = normalize_email(&request.email);
        let code = Self::validate_code_format(&request.code)?;

        // A prior explicit verify authorizes the reset; failing that, try
        // the code inline so clients may skip the separate verify call.
        let authorized = self.otp_store.is_verified(&email).await?
            || self.otp_store.verify(&email, &code).await?;
        if !authorized {
            tracing::warn!(
                email = %mask_email(&email),
                event = "reset_unauthorized",
                "Password reset attempted without a verified code"
            );
            return Err(PasswordResetError::InvalidOrExpiredCode.into());
        }

        if request.new_password != request.confirm_password {
            return Err(PasswordResetError::PasswordMismatch.into());
        }

        let violations = self.password_policy.validate(&request.new_password);
        if !violations.is_empty() {
            return Err(PasswordResetError::WeakPassword { violations }.into());
        }

        let account = self
            .account_repository
            .find_by_email(&email)
            .await?
            .ok_or(PasswordResetError::AccountNotFound)?;

        self.account_repository
            .update_password(account.id, &request.new_password)
            .await?;

        // Single use: consuming the code deletes the record
        self.otp_store.remove(&email).await?;

        tracing::info!(
            email = %mask_email(&email),
            account_id = %account.id,
            event = "password_reset_completed",
            "Password reset completed and code consumed"
        );

        Ok(())
    }

    /// Check a submitted code's shape and upper-case it
    ///
    /// Exactly [`CODE_LENGTH`] characters from `[0-9A-Za-z]`; anything else
    /// is input malformation, reported before the store is touched.
    fn validate_code_format(code: &str) -> DomainResult<String> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "code".to_string(),
            }
            .into());
        }
        if code.len() != CODE_LENGTH {
            return Err(ValidationError::InvalidLength {
                field: "code".to_string(),
                expected: CODE_LENGTH,
                actual: code.len(),
            }
            .into());
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidFormat {
                field: "code".to_string(),
            }
            .into());
        }
        Ok(code.to_ascii_uppercase())
    }
}
