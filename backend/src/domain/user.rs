//! User identity model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroizing;

/// Stable server-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Access role attached to a user account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Ordinary account; the default when registration does not specify one.
    #[default]
    User,
    /// Administrative account.
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("User"),
            Self::Admin => f.write_str("Admin"),
        }
    }
}

/// A registered account.
///
/// ## Invariants
/// - `email` is unique across all users; the store enforces this on insert.
/// - `password_hash` holds a KDF digest, never plaintext.
/// - `created_at` is stamped when the record is inserted and never mutated.
///
/// Incidents reported by this user reference it via
/// [`Incident::reported_by`](crate::domain::Incident::reported_by); an
/// optional volunteer profile references it via
/// [`Volunteer::user_id`](crate::domain::Volunteer::user_id). Neither is
/// owned by this struct, so the relationship graph stays acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier.
    pub id: UserId,
    /// Display name of the account holder.
    pub full_name: String,
    /// Unique contact address used for login.
    pub email: String,
    /// Stored credential digest.
    pub password_hash: String,
    /// Access role, defaulting to [`Role::User`].
    pub role: Role,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// Candidate account submitted to registration.
///
/// Carries the plaintext password the caller typed; the auth service hashes
/// it before anything is persisted. The plaintext is zeroised on drop and is
/// deliberately excluded from `Debug` output.
pub struct RegistrationRequest {
    /// Display name of the account holder.
    pub full_name: String,
    /// Contact address to register under.
    pub email: String,
    /// Plaintext password; never stored or logged.
    pub password: Zeroizing<String>,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Requested role; `None` defaults to [`Role::User`].
    pub role: Option<Role>,
}

impl RegistrationRequest {
    /// Build a candidate from raw form inputs.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
            phone: None,
            role: None,
        }
    }

    /// Attach a contact phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Request a specific role instead of the default.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phone", &self.phone)
            .field("role", &self.role)
            .finish()
    }
}
