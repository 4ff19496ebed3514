//! User domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::credential::PasswordCredential;
use crate::domain::validation::canonical_email;

/// A registered user identity.
///
/// `email` is always held in canonical (lowercased) form; uniqueness
/// comparisons and persistence lookups key on that value. `credential` is
/// set exclusively through credential derivation - the plaintext password
/// never appears on this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub credential: PasswordCredential,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record around a freshly derived credential
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        email: &str,
        credential: PasswordCredential,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            email: canonical_email(email),
            credential,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Proposed identity attributes, prior to validation. Used for both new
/// registrations and profile updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
