//! Integration tests for credence-core services
//!
//! These tests drive the full registration and authentication cycle through
//! the in-memory repository adapter.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::sync::Arc;

use credence_core::adapters::memory::InMemoryUserRepository;
use credence_core::config::Config;
use credence_core::domain::{HashingParams, PasswordPolicy};
use credence_core::{CredenceContext, Error, ValidationError};

// ============================================================================
// Test Helpers
// ============================================================================

/// Create a context over a fresh in-memory store, with cheap hashing
/// parameters so the suite stays fast
fn create_test_context() -> CredenceContext {
    let repository = Arc::new(InMemoryUserRepository::new());
    let config = Config {
        password_policy: PasswordPolicy::default(),
        hashing: HashingParams {
            time_cost: 1,
            memory_cost: 1024,
            parallelism: 1,
            hash_len: 32,
        },
    };
    CredenceContext::new(repository, config)
}

/// Unwrap the validation report out of an Error::Validation
fn validation_errors(err: Error) -> Vec<ValidationError> {
    match err {
        Error::Validation(report) => report.errors().to_vec(),
        other => panic!("expected validation error, got: {:?}", other),
    }
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_create_user_with_valid_attributes() {
    let ctx = create_test_context();
    let user = ctx
        .user_service
        .create_user("Example User", "user@example.com", "chiave99", "chiave99")
        .await
        .expect("valid attributes should create a user");

    assert_eq!(user.name, "Example User");
    assert_eq!(user.email, "user@example.com");
    assert!(user.credential.as_str().starts_with("$argon2id$"));
}

#[tokio::test]
async fn test_create_user_canonicalizes_email() {
    let ctx = create_test_context();
    let user = ctx
        .user_service
        .create_user("Example User", "USER@Example.COM", "chiave99", "chiave99")
        .await
        .unwrap();

    assert_eq!(user.email, "user@example.com");
}

#[tokio::test]
async fn test_create_user_rejects_duplicate_email_up_to_case() {
    let ctx = create_test_context();
    ctx.user_service
        .create_user("Example User", "user@example.com", "chiave99", "chiave99")
        .await
        .unwrap();

    for address in ["user@example.com", "USER@EXAMPLE.COM"] {
        let err = ctx
            .user_service
            .create_user("Another User", address, "chiave99", "chiave99")
            .await
            .unwrap_err();
        assert!(
            validation_errors(err).contains(&ValidationError::EmailNotUnique),
            "expected {} to collide",
            address
        );
    }
}

#[tokio::test]
async fn test_create_user_reports_every_violation_at_once() {
    let ctx = create_test_context();
    let err = ctx
        .user_service
        .create_user("", "user_at_foo.org", "short", "different")
        .await
        .unwrap_err();

    let errors = validation_errors(err);
    assert!(errors.contains(&ValidationError::NameBlank));
    assert!(errors.contains(&ValidationError::EmailMalformed));
    assert!(errors.contains(&ValidationError::PasswordMismatch));
    assert!(errors.contains(&ValidationError::PasswordTooShort));
}

#[tokio::test]
async fn test_create_user_password_boundaries() {
    let ctx = create_test_context();

    let err = ctx
        .user_service
        .create_user("Example User", "short@example.com", "aaaaa", "aaaaa")
        .await
        .unwrap_err();
    assert!(validation_errors(err).contains(&ValidationError::PasswordTooShort));

    let long = "a".repeat(41);
    let err = ctx
        .user_service
        .create_user("Example User", "long@example.com", &long, &long)
        .await
        .unwrap_err();
    assert!(validation_errors(err).contains(&ValidationError::PasswordTooLong));

    for (email, length) in [("six@example.com", 6), ("forty@example.com", 40)] {
        let password = "a".repeat(length);
        ctx.user_service
            .create_user("Example User", email, &password, &password)
            .await
            .unwrap_or_else(|e| panic!("length {} should be accepted: {}", length, e));
    }
}

#[tokio::test]
async fn test_create_user_rejects_blank_password() {
    let ctx = create_test_context();
    let err = ctx
        .user_service
        .create_user("Example User", "user@example.com", "", "")
        .await
        .unwrap_err();

    assert_eq!(validation_errors(err), vec![ValidationError::PasswordBlank]);
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_authenticate_matrix() {
    let ctx = create_test_context();
    let created = ctx
        .user_service
        .create_user("Example User", "user@example.com", "chiave99", "chiave99")
        .await
        .unwrap();

    // Correct password returns the matching record
    let found = ctx
        .user_service
        .authenticate("user@example.com", "chiave99")
        .await
        .unwrap();
    assert_eq!(found.map(|u| u.id), Some(created.id));

    // Wrong password and unknown email are indistinguishable
    let wrong = ctx
        .user_service
        .authenticate("user@example.com", "wrongpass")
        .await
        .unwrap();
    assert!(wrong.is_none());

    let unknown = ctx
        .user_service
        .authenticate("nonexistent@noemail.it", "chiave99")
        .await
        .unwrap();
    assert!(unknown.is_none());
}

#[tokio::test]
async fn test_authenticate_is_case_insensitive_on_email() {
    let ctx = create_test_context();
    let created = ctx
        .user_service
        .create_user("Example User", "user@example.com", "chiave99", "chiave99")
        .await
        .unwrap();

    let found = ctx
        .user_service
        .authenticate("USER@EXAMPLE.COM", "chiave99")
        .await
        .unwrap();
    assert_eq!(found.map(|u| u.id), Some(created.id));
}

// ============================================================================
// Profile Updates
// ============================================================================

#[tokio::test]
async fn test_update_profile_revalidates_and_keeps_credential() {
    let ctx = create_test_context();
    let created = ctx
        .user_service
        .create_user("Example User", "user@example.com", "chiave99", "chiave99")
        .await
        .unwrap();

    let updated = ctx
        .user_service
        .update_profile(created.id, "Renamed User", "Renamed@Example.com")
        .await
        .unwrap();
    assert_eq!(updated.name, "Renamed User");
    assert_eq!(updated.email, "renamed@example.com");

    // Old password still authenticates under the new address
    let found = ctx
        .user_service
        .authenticate("renamed@example.com", "chiave99")
        .await
        .unwrap();
    assert_eq!(found.map(|u| u.id), Some(created.id));
}

#[tokio::test]
async fn test_update_profile_keeping_own_email_is_not_a_duplicate() {
    let ctx = create_test_context();
    let created = ctx
        .user_service
        .create_user("Example User", "user@example.com", "chiave99", "chiave99")
        .await
        .unwrap();

    ctx.user_service
        .update_profile(created.id, "Renamed User", "user@example.com")
        .await
        .expect("own email must not collide with itself");
}

#[tokio::test]
async fn test_update_profile_rejects_anothers_email() {
    let ctx = create_test_context();
    ctx.user_service
        .create_user("First User", "first@example.com", "chiave99", "chiave99")
        .await
        .unwrap();
    let second = ctx
        .user_service
        .create_user("Second User", "second@example.com", "chiave99", "chiave99")
        .await
        .unwrap();

    let err = ctx
        .user_service
        .update_profile(second.id, "Second User", "FIRST@example.com")
        .await
        .unwrap_err();
    assert!(validation_errors(err).contains(&ValidationError::EmailNotUnique));
}

// ============================================================================
// Password Changes
// ============================================================================

#[tokio::test]
async fn test_change_password_rotates_credential() {
    let ctx = create_test_context();
    let created = ctx
        .user_service
        .create_user("Example User", "user@example.com", "chiave99", "chiave99")
        .await
        .unwrap();

    let updated = ctx
        .user_service
        .change_password(created.id, "nuova-chiave", "nuova-chiave")
        .await
        .unwrap();
    assert_ne!(updated.credential, created.credential);

    let old = ctx
        .user_service
        .authenticate("user@example.com", "chiave99")
        .await
        .unwrap();
    assert!(old.is_none());

    let new = ctx
        .user_service
        .authenticate("user@example.com", "nuova-chiave")
        .await
        .unwrap();
    assert_eq!(new.map(|u| u.id), Some(created.id));
}

#[tokio::test]
async fn test_change_password_validates_candidate() {
    let ctx = create_test_context();
    let created = ctx
        .user_service
        .create_user("Example User", "user@example.com", "chiave99", "chiave99")
        .await
        .unwrap();

    let err = ctx
        .user_service
        .change_password(created.id, "nuova-chiave", "altra-chiave")
        .await
        .unwrap_err();
    assert!(validation_errors(err).contains(&ValidationError::PasswordMismatch));

    // Failed change leaves the old credential in place
    let found = ctx
        .user_service
        .authenticate("user@example.com", "chiave99")
        .await
        .unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn test_change_password_unknown_user() {
    let ctx = create_test_context();
    let err = ctx
        .user_service
        .change_password(uuid::Uuid::new_v4(), "nuova-chiave", "nuova-chiave")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}
