//! Port abstraction for per-browser session state.
//!
//! The store is a plain key/value contract scoped to a single session id by
//! the caller. Passing it explicitly into the auth workflows (rather than
//! reading ambient framework state) keeps session access deterministic and
//! parallel-safe in tests.

use async_trait::async_trait;

/// Errors raised by session store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    /// The backing store rejected or lost the operation.
    #[error("session store operation failed: {message}")]
    Backend {
        /// Adapter-supplied description of the failure.
        message: String,
    },
}

impl SessionStoreError {
    /// Build a [`SessionStoreError::Backend`] error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Key/value state for one browser session.
///
/// Values are opaque byte payloads; the in-memory policy means state does
/// not survive process restarts, and a durable deployment backs this trait
/// with its own store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the payload stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SessionStoreError>;

    /// Store `value` under `key`, replacing any previous payload.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), SessionStoreError>;

    /// Remove the payload stored under `key`, if any.
    async fn remove(&self, key: &str) -> Result<(), SessionStoreError>;

    /// Drop all state held by this session.
    async fn clear(&self) -> Result<(), SessionStoreError>;
}
