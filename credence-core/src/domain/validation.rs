//! Validation taxonomy and email canonicalization

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default password length bounds, inclusive
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 40;

/// Accepted password length range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_length: DEFAULT_MAX_PASSWORD_LENGTH,
        }
    }
}

/// A single violated field rule
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name can't be blank")]
    NameBlank,

    #[error("name is too long")]
    NameTooLong,

    #[error("email can't be blank")]
    EmailBlank,

    #[error("email is not a valid address")]
    EmailMalformed,

    #[error("email has already been taken")]
    EmailNotUnique,

    #[error("password can't be blank")]
    PasswordBlank,

    #[error("password confirmation doesn't match")]
    PasswordMismatch,

    #[error("password is too short")]
    PasswordTooShort,

    #[error("password is too long")]
    PasswordTooLong,
}

/// Every rule a candidate record violated, collected so a caller can surface
/// all problems at once rather than the first one found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violated rule
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// True when no rule was violated
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, error: ValidationError) -> bool {
        self.errors.contains(&error)
    }

    /// The violated rules, in evaluation order
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "valid");
        }
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Canonical form of an email address, used for uniqueness comparison,
/// persistence lookups, and storage. Applied in exactly these places so two
/// addresses identical up to case always collide.
pub fn canonical_email(raw: &str) -> String {
    raw.to_lowercase()
}
