//! In-memory repository implementation
//!
//! Backs the test suite and embedded use. Uniqueness is checked under the
//! write lock, so `save` decides the check-then-write race atomically.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{canonical_email, User};
use crate::ports::UserRepository;

/// In-memory user store keyed by record id
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted records
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let wanted = canonical_email(email);
        let users = self
            .users
            .read()
            .map_err(|_| Error::database("user store lock poisoned"))?;
        Ok(users.values().find(|u| u.email == wanted).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| Error::database("user store lock poisoned"))?;
        Ok(users.get(&id).cloned())
    }

    async fn save(&self, user: &User) -> Result<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| Error::database("user store lock poisoned"))?;

        let email = canonical_email(&user.email);
        if users.values().any(|u| u.email == email) {
            return Err(Error::email_conflict(email));
        }

        users.insert(
            user.id,
            User {
                email,
                ..user.clone()
            },
        );
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| Error::database("user store lock poisoned"))?;

        if !users.contains_key(&user.id) {
            return Err(Error::not_found(format!("user {}", user.id)));
        }

        let email = canonical_email(&user.email);
        if users.values().any(|u| u.id != user.id && u.email == email) {
            return Err(Error::email_conflict(email));
        }

        users.insert(
            user.id,
            User {
                email,
                ..user.clone()
            },
        );
        Ok(())
    }
}
