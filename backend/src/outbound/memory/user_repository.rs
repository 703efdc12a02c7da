//! In-memory user directory.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{FIXTURE_ACCOUNTS, UserPersistenceError, UserRepository};
use crate::domain::{Error, User, UserId};

/// User directory held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Directory pre-populated with the built-in development accounts.
    pub fn with_fixture_accounts() -> Result<Self, Error> {
        let users = FIXTURE_ACCOUNTS
            .iter()
            .map(|account| account.user().map(|user| (user.id().clone(), user)))
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(Self {
            users: RwLock::new(users),
        })
    }
}

fn poisoned() -> UserPersistenceError {
    UserPersistenceError::query("user directory lock poisoned")
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn upsert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.get(id).cloned())
    }
}
