//! Repository port - persistence abstraction

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::User;

/// Persistence abstraction for user records.
///
/// The core depends only on this trait; implementations (adapters) provide
/// the actual storage. The validator's uniqueness lookup is advisory:
/// between its read and the eventual write, a concurrent creation can claim
/// the same email. `save` and `update` are the authoritative guard and must
/// enforce case-insensitive email uniqueness atomically.
#[async_trait]
pub trait UserRepository: Send + Sync {
    // === Lookups ===

    /// Find a user by email address, compared case-insensitively
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    // === Writes ===

    /// Persist a new user.
    ///
    /// Fails with `Error::EmailConflict` when another record already holds
    /// the same canonical email.
    async fn save(&self, user: &User) -> Result<()>;

    /// Update an existing user.
    ///
    /// Fails with `Error::EmailConflict` when the new email collides with a
    /// different record, and `Error::NotFound` when the id is unknown.
    async fn update(&self, user: &User) -> Result<()>;
}
