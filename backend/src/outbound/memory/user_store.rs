//! Process-local user store keyed by email.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{User, UserId};

/// In-memory [`UserStore`] holding users behind one mutex.
///
/// The duplicate check and the write in [`UserStore::insert`] happen under a
/// single lock acquisition, which gives the atomic check-and-insert the
/// registration flow relies on: of two concurrent inserts for one email,
/// exactly one succeeds.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    by_email: Mutex<HashMap<String, User>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users. Useful for asserting uniqueness in tests.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no users.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, User>> {
        // A poisoned lock means a writer panicked mid-operation; the map
        // itself is only mutated through single insert calls, so its
        // contents are still coherent.
        self.by_email
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        Ok(self.lock().get(email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        Ok(self.lock().values().find(|user| user.id == *id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, UserStoreError> {
        let mut users = self.lock();
        if users.contains_key(&user.email) {
            return Err(UserStoreError::DuplicateEmail);
        }
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}
