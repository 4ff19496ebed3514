//! User service - registration, profile updates, and authentication

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::validation::{canonical_email, ValidationError, ValidationReport};
use crate::domain::{PasswordCandidate, User, UserDraft};
use crate::ports::UserRepository;
use crate::services::{CredentialService, Validator};

/// User service orchestrating validation, credential handling, and
/// persistence
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    validator: Validator,
    credentials: CredentialService,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        validator: Validator,
        credentials: CredentialService,
    ) -> Self {
        Self {
            repository,
            validator,
            credentials,
        }
    }

    /// Direct access to the validator, e.g. for pre-flight form checks
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Register a new user.
    ///
    /// Runs the full validation cycle, derives the stored credential, and
    /// persists the record. A uniqueness race lost at the storage layer is
    /// reported the same way as the advisory check: a duplicate-email
    /// validation error.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<User> {
        let draft = UserDraft::new(name, email);
        let candidate = PasswordCandidate::new(password, password_confirmation);

        let report = self.validator.validate(&draft, Some(&candidate), None).await?;
        if !report.is_valid() {
            return Err(Error::Validation(report));
        }

        let credential = self.credentials.derive(candidate.password())?;
        let user = User::new(Uuid::new_v4(), draft.name, &draft.email, credential);

        match self.repository.save(&user).await {
            Ok(()) => {
                info!(user_id = %user.id, "created user");
                Ok(user)
            }
            Err(Error::EmailConflict(_)) => Err(duplicate_email()),
            Err(e) => Err(e),
        }
    }

    /// Look up a user by email and check the password guess.
    ///
    /// Unknown email and wrong password are the same `None`; callers cannot
    /// tell which rule failed.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>> {
        let found = self
            .repository
            .find_by_email(&canonical_email(email))
            .await?;

        let Some(user) = found else {
            debug!("authentication failed: unknown email");
            return Ok(None);
        };

        if self.credentials.verify(&user.credential, password) {
            Ok(Some(user))
        } else {
            debug!(user_id = %user.id, "authentication failed: bad password");
            Ok(None)
        }
    }

    /// Update name and email, re-running the full validation cycle. The
    /// record's own current email does not count as a duplicate.
    pub async fn update_profile(&self, id: Uuid, name: &str, email: &str) -> Result<User> {
        let Some(mut user) = self.repository.find_by_id(id).await? else {
            return Err(Error::not_found(format!("user {}", id)));
        };

        let draft = UserDraft::new(name, email);
        let report = self.validator.validate(&draft, None, Some(id)).await?;
        if !report.is_valid() {
            return Err(Error::Validation(report));
        }

        user.name = draft.name;
        user.email = canonical_email(&draft.email);
        user.updated_at = Utc::now();

        match self.repository.update(&user).await {
            Ok(()) => Ok(user),
            Err(Error::EmailConflict(_)) => Err(duplicate_email()),
            Err(e) => Err(e),
        }
    }

    /// Replace the stored credential after validating the new candidate
    pub async fn change_password(
        &self,
        id: Uuid,
        password: &str,
        password_confirmation: &str,
    ) -> Result<User> {
        let Some(mut user) = self.repository.find_by_id(id).await? else {
            return Err(Error::not_found(format!("user {}", id)));
        };

        let candidate = PasswordCandidate::new(password, password_confirmation);
        let draft = UserDraft::new(user.name.clone(), user.email.clone());
        let report = self
            .validator
            .validate(&draft, Some(&candidate), Some(id))
            .await?;
        if !report.is_valid() {
            return Err(Error::Validation(report));
        }

        user.credential = self.credentials.derive(candidate.password())?;
        user.updated_at = Utc::now();
        self.repository.update(&user).await?;

        info!(user_id = %user.id, "changed password");
        Ok(user)
    }
}

fn duplicate_email() -> Error {
    let mut report = ValidationReport::new();
    report.push(ValidationError::EmailNotUnique);
    Error::Validation(report)
}
