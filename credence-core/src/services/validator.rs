//! Validator service - acceptability of proposed user records
//!
//! Field rules are pure functions of the draft. The uniqueness check is a
//! read-only lookup through the repository port and is advisory only; the
//! storage layer decides concurrent creations (see the repository port).

use std::sync::Arc;

use regex::Regex;
use tracing::debug;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::validation::{canonical_email, ValidationError, ValidationReport};
use crate::domain::{PasswordCandidate, PasswordPolicy, UserDraft};
use crate::ports::UserRepository;

/// Maximum accepted name length, in characters
const MAX_NAME_LENGTH: usize = 50;

/// Accepted address shape: letters/digits/`._+-` local part, `@`, and a
/// dotted domain ending in an alphabetic segment. Deliberately narrower than
/// full RFC 5322.
const EMAIL_PATTERN: &str = r"(?i)^[a-z0-9_+.-]+@[a-z0-9.-]+\.[a-z]+$";

/// Validator for proposed user records
pub struct Validator {
    repository: Arc<dyn UserRepository>,
    email_re: Regex,
    policy: PasswordPolicy,
}

impl Validator {
    pub fn new(repository: Arc<dyn UserRepository>, policy: PasswordPolicy) -> Self {
        Self {
            repository,
            email_re: Regex::new(EMAIL_PATTERN).unwrap(),
            policy,
        }
    }

    /// Evaluate the field rules alone. Pure: no lookups, no side effects.
    ///
    /// Password rules run only when a candidate is supplied, i.e. on
    /// creation or an explicit password change.
    pub fn check_fields(
        &self,
        draft: &UserDraft,
        candidate: Option<&PasswordCandidate>,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        if draft.name.is_empty() {
            report.push(ValidationError::NameBlank);
        } else if draft.name.chars().count() > MAX_NAME_LENGTH {
            report.push(ValidationError::NameTooLong);
        }

        if draft.email.is_empty() {
            report.push(ValidationError::EmailBlank);
        } else if !self.email_re.is_match(&draft.email) {
            report.push(ValidationError::EmailMalformed);
        }

        if let Some(candidate) = candidate {
            self.check_password(candidate, &mut report);
        }

        report
    }

    fn check_password(&self, candidate: &PasswordCandidate, report: &mut ValidationReport) {
        let password = candidate.password();

        // A blank password reports only PasswordBlank; the length rules
        // would restate the same problem.
        if password.is_empty() {
            report.push(ValidationError::PasswordBlank);
            return;
        }

        if !candidate.matches_confirmation() {
            report.push(ValidationError::PasswordMismatch);
        }

        let length = password.chars().count();
        if length < self.policy.min_length {
            report.push(ValidationError::PasswordTooShort);
        } else if length > self.policy.max_length {
            report.push(ValidationError::PasswordTooLong);
        }
    }

    /// Full validation: field rules plus the advisory uniqueness lookup.
    ///
    /// `exclude` names a record allowed to keep its own email, so a profile
    /// update re-validating an unchanged address is not its own duplicate.
    pub async fn validate(
        &self,
        draft: &UserDraft,
        candidate: Option<&PasswordCandidate>,
        exclude: Option<Uuid>,
    ) -> Result<ValidationReport> {
        let mut report = self.check_fields(draft, candidate);

        // Only well-formed addresses are worth a lookup
        if !draft.email.is_empty() && !report.contains(ValidationError::EmailMalformed) {
            let existing = self
                .repository
                .find_by_email(&canonical_email(&draft.email))
                .await?;
            if let Some(existing) = existing {
                if exclude != Some(existing.id) {
                    report.push(ValidationError::EmailNotUnique);
                }
            }
        }

        if !report.is_valid() {
            debug!(errors = %report, "rejected user record");
        }

        Ok(report)
    }
}
