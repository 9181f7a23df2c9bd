//! Volunteer profiles attached to user accounts.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// Stable server-assigned volunteer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolunteerId(Uuid);

impl VolunteerId {
    /// Generate a new random [`VolunteerId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for VolunteerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A user's volunteer profile.
///
/// One-to-one with the owning account via the `user_id` back-reference; the
/// store resolves the account on demand rather than this struct owning it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    /// Server-assigned identifier.
    pub id: VolunteerId,
    /// Id of the owning user account.
    pub user_id: UserId,
    /// Free-text description of skills offered, e.g. `"First Aid"`.
    pub skills: String,
}

impl Volunteer {
    /// Create a profile for the given account.
    pub fn new(user_id: UserId, skills: impl Into<String>) -> Self {
        Self {
            id: VolunteerId::random(),
            user_id,
            skills: skills.into(),
        }
    }
}
