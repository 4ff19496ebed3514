//! Credential domain models

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Default Argon2id parameters
pub const DEFAULT_TIME_COST: u32 = 3;
pub const DEFAULT_MEMORY_COST: u32 = 65536; // 64 MiB
pub const DEFAULT_PARALLELISM: u32 = 4;
pub const DEFAULT_HASH_LEN: u32 = 32;

/// Argon2id parameters for password derivation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashingParams {
    pub time_cost: u32,
    pub memory_cost: u32,
    pub parallelism: u32,
    pub hash_len: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            time_cost: DEFAULT_TIME_COST,
            memory_cost: DEFAULT_MEMORY_COST,
            parallelism: DEFAULT_PARALLELISM,
            hash_len: DEFAULT_HASH_LEN,
        }
    }
}

/// Stored, non-reversible representation of a password.
///
/// Wraps a PHC-format Argon2id string; the salt and cost parameters travel
/// inside the encoded value, so verification needs nothing else.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordCredential(String);

impl PasswordCredential {
    /// Wrap an already-encoded PHC string, e.g. one read back from storage
    pub fn from_phc(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Hash material stays out of logs and debug output
        write!(f, "PasswordCredential(..)")
    }
}

/// Transient plaintext password plus confirmation, supplied at creation or
/// password-change time. Held in zeroizing buffers, never serialized, and
/// discarded once a credential has been derived.
#[derive(Clone)]
pub struct PasswordCandidate {
    password: Zeroizing<String>,
    confirmation: Zeroizing<String>,
}

impl PasswordCandidate {
    pub fn new(password: impl Into<String>, confirmation: impl Into<String>) -> Self {
        Self {
            password: Zeroizing::new(password.into()),
            confirmation: Zeroizing::new(confirmation.into()),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirmation(&self) -> &str {
        &self.confirmation
    }

    /// True when password and confirmation are exactly equal
    pub fn matches_confirmation(&self) -> bool {
        *self.password == *self.confirmation
    }
}

impl fmt::Debug for PasswordCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PasswordCandidate(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hashing_params() {
        let params = HashingParams::default();
        assert_eq!(params.time_cost, 3);
        assert_eq!(params.memory_cost, 65536);
        assert_eq!(params.parallelism, 4);
        assert_eq!(params.hash_len, 32);
    }

    #[test]
    fn test_candidate_confirmation() {
        let matching = PasswordCandidate::new("chiave1", "chiave1");
        assert!(matching.matches_confirmation());

        let mismatched = PasswordCandidate::new("chiave1", "chiave2");
        assert!(!mismatched.matches_confirmation());
    }

    #[test]
    fn test_debug_output_is_redacted() {
        let candidate = PasswordCandidate::new("topsecret", "topsecret");
        let rendered = format!("{:?}", candidate);
        assert!(!rendered.contains("topsecret"));

        let credential = PasswordCredential::from_phc("$argon2id$v=19$m=65536,t=3,p=4$abc$def");
        let rendered = format!("{:?}", credential);
        assert!(!rendered.contains("argon2id"));
    }
}
