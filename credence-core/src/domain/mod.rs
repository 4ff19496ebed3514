//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod credential;
mod user;
pub mod result;
pub mod validation;

pub use credential::{HashingParams, PasswordCandidate, PasswordCredential};
pub use user::{User, UserDraft};
pub use validation::{canonical_email, PasswordPolicy, ValidationError, ValidationReport};
