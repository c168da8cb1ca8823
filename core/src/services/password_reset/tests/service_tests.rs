//! Unit tests for the password-reset service

use std::sync::Arc;

use crate::domain::entities::account::Account;
use crate::errors::{DomainError, PasswordResetError, ValidationError};
use crate::repositories::MockAccountRepository;
use crate::services::otp::{InMemoryOtpStore, OtpStoreTrait};
use crate::services::password_reset::{PasswordResetService, PasswordResetServiceConfig};
use crate::services::password_reset::types::ResetPasswordRequest;

use super::mocks::{MockDeliveryChannel, MockPasswordPolicy};

type TestService =
    PasswordResetService<MockAccountRepository, InMemoryOtpStore, MockDeliveryChannel, MockPasswordPolicy>;

struct Harness {
    service: TestService,
    accounts: Arc<MockAccountRepository>,
    store: Arc<InMemoryOtpStore>,
    delivery: Arc<MockDeliveryChannel>,
}

fn harness_with(policy: MockPasswordPolicy, delivery_fails: bool) -> Harness {
    let accounts = Arc::new(MockAccountRepository::new());
    let store = Arc::new(InMemoryOtpStore::default());
    let delivery = Arc::new(MockDeliveryChannel::new(delivery_fails));
    let policy = Arc::new(policy);

    let service = PasswordResetService::new(
        Arc::clone(&accounts),
        Arc::clone(&store),
        Arc::clone(&delivery),
        policy,
        PasswordResetServiceConfig::default(),
    );

    Harness {
        service,
        accounts,
        store,
        delivery,
    }
}

fn harness() -> Harness {
    harness_with(MockPasswordPolicy::permissive(), false)
}

async fn seed_account(h: &Harness, email: &str) -> Account {
    let account = Account::new(
        email.to_string(),
        "$2b$12$old-hash".to_string(),
        "Sam".to_string(),
    );
    h.accounts.insert(account.clone()).await;
    account
}

fn reset_request(email: &str, code: &str, password: &str, confirm: &str) -> ResetPasswordRequest {
    ResetPasswordRequest {
        email: email.to_string(),
        code: code.to_string(),
        new_password: password.to_string(),
        confirm_password: confirm.to_string(),
    }
}

#[tokio::test]
async fn test_full_reset_flow() {
    let h = harness();
    let account = seed_account(&h, "user@example.com").await;

    // Request: a code lands on the delivery channel
    let ack = h.service.forgot_password("user@example.com").await.unwrap();
    assert!(!ack.message.is_empty());
    let code = h.delivery.last_code_for("user@example.com").unwrap();

    // Verify accepts the code with the identity in any case
    h.service
        .verify_reset_code("USER@EXAMPLE.COM", &code)
        .await
        .unwrap();

    // Reset replaces the password and consumes the code
    h.service
        .reset_password(&reset_request(
            "user@example.com",
            &code,
            "NewPass1!",
            "NewPass1!",
        ))
        .await
        .unwrap();

    let updated = h.accounts.get(account.id).await.unwrap();
    assert_eq!(updated.password_hash, "hashed:NewPass1!");

    // The code is single use: a repeat reset with the same code fails
    let err = h
        .service
        .reset_password(&reset_request(
            "user@example.com",
            &code,
            "OtherPass1!",
            "OtherPass1!",
        ))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::PasswordReset(PasswordResetError::InvalidOrExpiredCode)
    ));

    // And so does a repeat verify
    let err = h
        .service
        .verify_reset_code("user@example.com", &code)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::PasswordReset(PasswordResetError::InvalidOrExpiredCode)
    ));
}

#[tokio::test]
async fn test_unknown_email_gets_identical_ack_and_no_code() {
    let h = harness();
    seed_account(&h, "user@example.com").await;

    let known = h.service.forgot_password("user@example.com").await.unwrap();
    let unknown = h
        .service
        .forgot_password("ghost@nowhere.test")
        .await
        .unwrap();

    // Byte-identical acknowledgment for both branches
    assert_eq!(known, unknown);

    // No code was issued or delivered for the unknown address
    assert!(h.delivery.last_code_for("ghost@nowhere.test").is_none());
    assert_eq!(h.delivery.delivery_count(), 1);
    let err = h
        .service
        .verify_reset_code("ghost@nowhere.test", "AB1CD")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::PasswordReset(PasswordResetError::InvalidOrExpiredCode)
    ));
}

#[tokio::test]
async fn test_forgot_password_rejects_malformed_email() {
    let h = harness();

    let err = h.service.forgot_password("   ").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { .. })
    ));

    let err = h.service.forgot_password("not-an-email").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::InvalidEmail)
    ));
}

#[tokio::test]
async fn test_verify_rejects_malformed_code_before_store() {
    let h = harness();
    seed_account(&h, "user@example.com").await;
    h.service.forgot_password("user@example.com").await.unwrap();

    let err = h
        .service
        .verify_reset_code("user@example.com", "AB1")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::InvalidLength {
            expected: 5,
            actual: 3,
            ..
        })
    ));

    let err = h
        .service
        .verify_reset_code("user@example.com", "AB-1!")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::InvalidFormat { .. })
    ));

    let err = h
        .service
        .verify_reset_code("user@example.com", "")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { .. })
    ));

    // A well-formed but wrong code is an authorization failure, not a
    // validation one (skip the astronomically unlikely case where the
    // issued code happens to be exactly this guess)
    let issued = h.delivery.last_code_for("user@example.com").unwrap();
    if issued != "A1B2C" {
        let err = h
            .service
            .verify_reset_code("user@example.com", "A1B2C")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::PasswordReset(PasswordResetError::InvalidOrExpiredCode)
        ));
    }
}

#[tokio::test]
async fn test_reset_with_inline_verify_fallback() {
    let h = harness();
    let account = seed_account(&h, "user@example.com").await;

    h.service.forgot_password("user@example.com").await.unwrap();
    let code = h.delivery.last_code_for("user@example.com").unwrap();

    // No explicit verify call: the reset step verifies the code inline,
    // in lower case for good measure
    h.service
        .reset_password(&reset_request(
            "user@example.com",
            &code.to_lowercase(),
            "NewPass1!",
            "NewPass1!",
        ))
        .await
        .unwrap();

    let updated = h.accounts.get(account.id).await.unwrap();
    assert_eq!(updated.password_hash, "hashed:NewPass1!");
}

#[tokio::test]
async fn test_reset_requires_all_fields() {
    let h = harness();

    let err = h
        .service
        .reset_password(&reset_request("user@example.com", "A1B2C", "", ""))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { ref field }) if field == "new_password"
    ));

    let err = h
        .service
        .reset_password(&reset_request("", "A1B2C", "pw", "pw"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { ref field }) if field == "email"
    ));
}

#[tokio::test]
async fn test_reset_rejects_password_mismatch() {
    let h = harness();
    seed_account(&h, "user@example.com").await;

    h.service.forgot_password("user@example.com").await.unwrap();
    let code = h.delivery.last_code_for("user@example.com").unwrap();
    h.service
        .verify_reset_code("user@example.com", &code)
        .await
        .unwrap();

    let err = h
        .service
        .reset_password(&reset_request(
            "user@example.com",
            &code,
            "NewPass1!",
            "Different1!",
        ))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::PasswordReset(PasswordResetError::PasswordMismatch)
    ));

    // The code survives a mismatch and still authorizes a correct retry
    h.service
        .reset_password(&reset_request(
            "user@example.com",
            &code,
            "NewPass1!",
            "NewPass1!",
        ))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_reset_rejects_weak_password() {
    let h = harness_with(
        MockPasswordPolicy::rejecting(&["too short", "needs a digit"]),
        false,
    );
    seed_account(&h, "user@example.com").await;

    h.service.forgot_password("user@example.com").await.unwrap();
    let code = h.delivery.last_code_for("user@example.com").unwrap();
    h.service
        .verify_reset_code("user@example.com", &code)
        .await
        .unwrap();

    let err = h
        .service
        .reset_password(&reset_request("user@example.com", &code, "weak", "weak"))
        .await
        .unwrap_err();
    match err {
        DomainError::PasswordReset(PasswordResetError::WeakPassword { violations }) => {
            assert_eq!(violations, vec!["too short", "needs a digit"]);
        }
        other => panic!("expected WeakPassword, got {other:?}"),
    }
}

#[tokio::test]
async fn test_reset_reports_missing_account_explicitly() {
    let h = harness();

    // Issue a code straight through the store: the account vanished after
    // issuance (e.g. deleted between verify and reset)
    let code = h.store.issue("gone@example.com").await.unwrap();
    assert!(h.store.verify("gone@example.com", &code).await.unwrap());

    let err = h
        .service
        .reset_password(&reset_request("gone@example.com", &code, "pw1!", "pw1!"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::PasswordReset(PasswordResetError::AccountNotFound)
    ));
}

#[tokio::test]
async fn test_delivery_failure_is_absorbed() {
    let h = harness_with(MockPasswordPolicy::permissive(), true);
    seed_account(&h, "user@example.com").await;

    // Issuance succeeds despite the broken channel
    let ack = h.service.forgot_password("user@example.com").await.unwrap();
    assert!(!ack.message.is_empty());

    // The code the channel failed to carry is still valid
    let code = h.delivery.last_code_for("user@example.com").unwrap();
    h.service
        .verify_reset_code("user@example.com", &code)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_identity_normalization_converges() {
    let h = harness();
    let account = seed_account(&h, "user@example.com").await;

    h.service
        .forgot_password("  USER@Example.COM ")
        .await
        .unwrap();
    let code = h.delivery.last_code_for("user@example.com").unwrap();

    h.service
        .verify_reset_code("User@Example.com", &code)
        .await
        .unwrap();

    h.service
        .reset_password(&reset_request(
            " user@EXAMPLE.com ",
            &code,
            "NewPass1!",
            "NewPass1!",
        ))
        .await
        .unwrap();

    let updated = h.accounts.get(account.id).await.unwrap();
    assert_eq!(updated.password_hash, "hashed:NewPass1!");
}

#[tokio::test]
async fn test_reissue_supersedes_previous_code() {
    let h = harness();
    seed_account(&h, "user@example.com").await;

    h.service.forgot_password("user@example.com").await.unwrap();
    let first = h.delivery.last_code_for("user@example.com").unwrap();

    h.service.forgot_password("user@example.com").await.unwrap();
    let second = h.delivery.last_code_for("user@example.com").unwrap();

    if first != second {
        let err = h
            .service
            .verify_reset_code("user@example.com", &first)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::PasswordReset(PasswordResetError::InvalidOrExpiredCode)
        ));
    }
    h.service
        .verify_reset_code("user@example.com", &second)
        .await
        .unwrap();
}
