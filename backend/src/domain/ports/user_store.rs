//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserId};

/// Persistence errors raised by user store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Store connection could not be established.
    #[error("user store connection failed: {message}")]
    Connection {
        /// Adapter-supplied description of the connection failure.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query {
        /// Adapter-supplied description of the failed operation.
        message: String,
    },
    /// Insert lost the uniqueness race: the email is already present.
    #[error("email address is already registered")]
    DuplicateEmail,
}

impl UserStoreError {
    /// Build a [`UserStoreError::Connection`] error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a [`UserStoreError::Query`] error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Durable mapping of email to user record with uniqueness enforcement.
///
/// `insert` must be an atomic check-and-insert: two concurrent inserts with
/// the same email yield exactly one success and one
/// [`UserStoreError::DuplicateEmail`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by exact email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError>;

    /// Persist a new user, failing with [`UserStoreError::DuplicateEmail`]
    /// when the email is already present.
    async fn insert(&self, user: User) -> Result<User, UserStoreError>;
}
