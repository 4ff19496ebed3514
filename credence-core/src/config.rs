//! Configuration management
//!
//! Reads an optional `settings.json` from the hosting application's data
//! directory:
//! ```json
//! {
//!   "security": {
//!     "passwordPolicy": { "min_length": 6, "max_length": 40 },
//!     "hashing": { "time_cost": 3, "memory_cost": 65536, ... }
//!   }
//! }
//! ```
//! Missing file or unreadable content falls back to the defaults.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::{HashingParams, PasswordPolicy};

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    security: SecuritySettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecuritySettings {
    #[serde(default)]
    password_policy: Option<PasswordPolicy>,
    #[serde(default)]
    hashing: Option<HashingParams>,
}

/// Credence configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub password_policy: PasswordPolicy,
    pub hashing: HashingParams,
}

impl Config {
    /// Load config from a directory containing settings.json
    pub fn load(dir: &Path) -> Result<Self> {
        let settings_path = dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        Ok(Self {
            password_policy: raw.security.password_policy.unwrap_or_default(),
            hashing: raw.security.hashing.unwrap_or_default(),
        })
    }
}
