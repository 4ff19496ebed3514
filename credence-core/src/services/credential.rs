//! Credential service - password derivation and verification
//!
//! Argon2id in PHC string form: the salt and cost parameters are encoded in
//! the credential itself, so verification is self-describing.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Version};
use rand::rngs::OsRng;
use tracing::warn;

use crate::domain::result::{Error, Result};
use crate::domain::{HashingParams, PasswordCredential};

/// Credential service for password derivation and matching
pub struct CredentialService {
    params: HashingParams,
}

impl CredentialService {
    pub fn new(params: HashingParams) -> Self {
        Self { params }
    }

    fn hasher(&self) -> Result<Argon2<'static>> {
        let params = argon2::Params::new(
            self.params.memory_cost,
            self.params.time_cost,
            self.params.parallelism,
            Some(self.params.hash_len as usize),
        )
        .map_err(|e| Error::credential(format!("invalid argon2 params: {}", e)))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Derive a stored credential from a plaintext password.
    ///
    /// Each call draws a fresh salt from the OS CSPRNG, so deriving the same
    /// password twice yields two distinct credentials that both verify.
    pub fn derive(&self, password: &str) -> Result<PasswordCredential> {
        if password.is_empty() {
            // The validator rejects blank passwords before derivation;
            // reaching this is a caller bug.
            return Err(Error::InvalidPassword("password is empty".to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .hasher()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| Error::credential(format!("failed to hash password: {}", e)))?;

        Ok(PasswordCredential::from_phc(hash.to_string()))
    }

    /// Check a plaintext guess against a stored credential.
    ///
    /// The digest is recomputed with the salt and parameters embedded in the
    /// PHC string and compared in constant time by the password-hash
    /// verifier. Mismatch and malformed stored values are both `false`,
    /// never errors.
    pub fn verify(&self, credential: &PasswordCredential, guess: &str) -> bool {
        let parsed = match PasswordHash::new(credential.as_str()) {
            Ok(hash) => hash,
            Err(e) => {
                warn!("stored credential failed to parse: {}", e);
                return false;
            }
        };

        Argon2::default()
            .verify_password(guess.as_bytes(), &parsed)
            .is_ok()
    }
}
