//! Process-local key/value session state.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{SessionStore, SessionStoreError};

/// In-memory [`SessionStore`] for one browser session.
///
/// One instance corresponds to one session id; the caller owning that id is
/// the only accessor, so a plain mutex around the map suffices.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    values: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemorySessionStore {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SessionStoreError> {
        Ok(self.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), SessionStoreError> {
        self.lock().insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        self.lock().remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        self.lock().clear();
        Ok(())
    }
}
