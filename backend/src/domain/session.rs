//! Session identity helpers shared by the auth workflows.
//!
//! Wraps the raw byte-oriented [`SessionStore`] port so callers only deal
//! with domain-level operations such as persisting or retrieving a user id.
//! The wrapper owns the encoding of the identity value; a payload that does
//! not decode to a user id is treated as absent rather than an error, so a
//! tampered session degrades to "not logged in".

use crate::domain::error::SessionError;
use crate::domain::ports::SessionStore;
use crate::domain::UserId;

/// Session key under which the authenticated user id is stored.
pub const USER_ID_KEY: &str = "UserId";

/// Domain-level view over one browser session.
pub struct SessionContext<'a, S: SessionStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: SessionStore + ?Sized> SessionContext<'a, S> {
    /// Wrap the session store backing a single request.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Persist the authenticated user's id in the session.
    pub async fn persist_user(&self, user_id: &UserId) -> Result<(), SessionError> {
        self.store
            .set(USER_ID_KEY, user_id.to_string().into_bytes())
            .await
            .map_err(SessionError::from)
    }

    /// Fetch the current user id from the session, if present.
    pub async fn user_id(&self) -> Result<Option<UserId>, SessionError> {
        let Some(raw) = self.store.get(USER_ID_KEY).await? else {
            return Ok(None);
        };
        let Ok(text) = std::str::from_utf8(&raw) else {
            tracing::warn!("session identity payload is not valid UTF-8");
            return Ok(None);
        };
        match text.parse::<UserId>() {
            Ok(id) => Ok(Some(id)),
            Err(error) => {
                tracing::warn!("invalid user id in session: {error}");
                Ok(None)
            }
        }
    }

    /// Drop all state for this session, ending any login.
    pub async fn clear(&self) -> Result<(), SessionError> {
        self.store.clear().await.map_err(SessionError::from)
    }
}
