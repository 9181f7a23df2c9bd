//! Failure taxonomy for the authentication and validation workflows.
//!
//! Recoverable failures are structured so the (excluded) HTTP layer can bind
//! them to form fields; fatal store or hashing failures deliberately display
//! an opaque message and carry the underlying cause only as an error source
//! for logging.

use serde::Serialize;

use crate::domain::ports::{HashError, SessionStoreError, UserStoreError};

/// A single field-level validation failure with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Name of the offending entity field, e.g. `"Email"`.
    pub field: &'static str,
    /// Message suitable for direct display next to the field.
    pub message: String,
}

impl Violation {
    /// Build a violation for the given field.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Failures raised by [`AuthService::register`](crate::domain::AuthService::register).
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    /// The candidate failed one or more validation rules.
    #[error("registration input is invalid")]
    Invalid(Vec<Violation>),
    /// A unique field value is already taken by an existing account.
    #[error("an account with this {field} already exists")]
    Conflict {
        /// The unique field that collided, always `"Email"` here.
        field: &'static str,
    },
    /// The user store failed; nothing was persisted.
    #[error("registration failed")]
    Store(#[source] UserStoreError),
    /// Credential hashing failed; nothing was persisted.
    #[error("registration failed")]
    Hash(#[source] HashError),
}

impl RegisterError {
    /// Violations attached to an [`RegisterError::Invalid`] result, if any.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Invalid(violations) => violations,
            _ => &[],
        }
    }
}

/// Failures raised by [`AuthService::login`](crate::domain::AuthService::login).
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown email or wrong password. The message is identical for both
    /// causes so callers cannot enumerate registered addresses.
    #[error("Invalid login credentials")]
    InvalidCredentials,
    /// The user store failed.
    #[error("login failed")]
    Store(#[source] UserStoreError),
    /// Writing the authenticated identity into the session failed.
    #[error("login failed")]
    Session(#[source] SessionStoreError),
}

/// Failures raised while reading authenticated identity from a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The backing session store failed.
    #[error("session read failed")]
    Store(#[from] SessionStoreError),
}
