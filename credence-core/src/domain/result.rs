//! Result and error types for the core library

use thiserror::Error;

use crate::domain::validation::ValidationReport;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    #[error("Email already taken: {0}")]
    EmailConflict(String),

    /// Derivation was handed a password the validator should have rejected.
    /// A caller bug, not a user-facing condition.
    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a credential error
    pub fn credential(msg: impl Into<String>) -> Self {
        Self::Credential(msg.into())
    }

    /// Create an email conflict error
    pub fn email_conflict(email: impl Into<String>) -> Self {
        Self::EmailConflict(email.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
