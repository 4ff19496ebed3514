//! Credence Core - user identity and authentication logic
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User, PasswordCredential, etc.)
//! - **ports**: Trait definitions for external dependencies (UserRepository)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (in-memory store)
//!
//! Persistence is owned by the hosting application; it hands the context a
//! `UserRepository` implementation and gets back the registration and
//! authentication surface.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use config::Config;
use ports::UserRepository;
use services::{CredentialService, UserService, Validator};

// Re-export commonly used types at crate root
pub use adapters::memory::InMemoryUserRepository;
pub use domain::result::Error;
pub use domain::{
    PasswordCandidate, PasswordCredential, User, UserDraft, ValidationError, ValidationReport,
};

/// Main context for Credence operations
///
/// The primary entry point for callers. It wires the validator, credential,
/// and user services around the repository supplied by the hosting
/// application.
pub struct CredenceContext {
    pub config: Config,
    pub repository: Arc<dyn UserRepository>,
    pub user_service: UserService,
}

impl CredenceContext {
    /// Create a new Credence context over an externally owned repository
    pub fn new(repository: Arc<dyn UserRepository>, config: Config) -> Self {
        let validator = Validator::new(Arc::clone(&repository), config.password_policy.clone());
        let credentials = CredentialService::new(config.hashing.clone());
        let user_service = UserService::new(Arc::clone(&repository), validator, credentials);

        Self {
            config,
            repository,
            user_service,
        }
    }

    /// Create a context loading settings from `dir`; falls back to defaults
    /// when no settings.json is present
    pub fn load(dir: &Path, repository: Arc<dyn UserRepository>) -> Result<Self> {
        let config = Config::load(dir)?;
        Ok(Self::new(repository, config))
    }
}
