//! Registration and login orchestration over the abstract stores.
//!
//! Each call is an independent, stateless unit of work: the service holds no
//! mutable state of its own, so one instance can serve concurrent requests.
//! Uniqueness is enforced twice: an early lookup gives friendly conflicts,
//! and the store's atomic check-and-insert closes the race window between
//! two concurrent registrations for the same email.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::error::{LoginError, RegisterError, SessionError};
use crate::domain::ports::{CredentialHasher, SessionStore, UserStore, UserStoreError};
use crate::domain::validation::validate_registration;
use crate::domain::{Credentials, RegistrationRequest, Role, SessionContext, User, UserId};

/// Valid Argon2id digest of an unrelated throwaway password. Login verifies
/// against it when the email is unknown so that path does the same KDF work
/// as a wrong-password attempt and cannot be told apart by timing.
const ENUMERATION_GUARD_DIGEST: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$VE0e3g7DalWHgDwou3nuRA$uC6TER156UQpk0lNQ5+jHM0l5poVjPA1he8TZebqcvA";

/// Where the (excluded) HTTP layer should send the caller next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Redirect {
    /// The login form; issued after registration or for anonymous sessions.
    Login,
    /// The standard authenticated landing page.
    UserHome,
    /// The administrative landing page.
    AdminHome,
}

/// Outcome of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    /// Id of the authenticated account, also written into the session.
    pub user_id: UserId,
    /// Role-dependent landing page.
    pub redirect: Redirect,
}

/// Orchestrates registration and login using the validation engine, the
/// credential hasher, and the user store.
pub struct AuthService<S, H> {
    users: Arc<S>,
    hasher: Arc<H>,
}

// Manual impl: cloning shares the Arc'd ports and must not require the
// adapters themselves to be Clone.
impl<S, H> Clone for AuthService<S, H> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<S, H> AuthService<S, H> {
    /// Create a service over the given store and hasher.
    pub fn new(users: Arc<S>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

impl<S, H> AuthService<S, H>
where
    S: UserStore,
    H: CredentialHasher,
{
    /// Register a new account.
    ///
    /// Validation failures and email conflicts are recoverable and reported
    /// per-field; hashing or store failures are fatal and leave no partial
    /// record behind, because the plaintext is hashed before anything is
    /// persisted and the insert itself is atomic.
    #[instrument(skip_all, fields(email = %candidate.email))]
    pub async fn register(&self, candidate: RegistrationRequest) -> Result<User, RegisterError> {
        let violations = validate_registration(&candidate);
        if !violations.is_empty() {
            return Err(RegisterError::Invalid(violations));
        }

        let existing = self
            .users
            .find_by_email(&candidate.email)
            .await
            .map_err(RegisterError::Store)?;
        if existing.is_some() {
            tracing::debug!("registration rejected: email already taken");
            return Err(RegisterError::Conflict { field: "Email" });
        }

        let digest = self
            .hasher
            .hash(candidate.password.as_str())
            .map_err(RegisterError::Hash)?;

        let user = User {
            id: UserId::random(),
            full_name: candidate.full_name,
            email: candidate.email,
            password_hash: digest,
            role: candidate.role.unwrap_or_default(),
            phone: candidate.phone,
            // Stamped at the moment of store insertion, not form submission.
            created_at: Utc::now(),
        };

        match self.users.insert(user).await {
            Ok(stored) => Ok(stored),
            // A concurrent registration won the race after our early check.
            Err(UserStoreError::DuplicateEmail) => {
                tracing::debug!("registration lost uniqueness race");
                Err(RegisterError::Conflict { field: "Email" })
            }
            Err(error) => Err(RegisterError::Store(error)),
        }
    }

    /// Authenticate credentials and establish the session identity.
    ///
    /// Unknown email and wrong password return the identical
    /// [`LoginError::InvalidCredentials`]; neither the message nor the work
    /// performed reveals whether the address is registered.
    #[instrument(skip_all, fields(email = %credentials.email()))]
    pub async fn login<T>(
        &self,
        credentials: &Credentials,
        session: &T,
    ) -> Result<LoginSuccess, LoginError>
    where
        T: SessionStore + ?Sized,
    {
        let user = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(LoginError::Store)?;

        let Some(user) = user else {
            let _ = self
                .hasher
                .verify(credentials.password(), ENUMERATION_GUARD_DIGEST);
            return Err(LoginError::InvalidCredentials);
        };

        if !self.hasher.verify(credentials.password(), &user.password_hash) {
            return Err(LoginError::InvalidCredentials);
        }

        SessionContext::new(session)
            .persist_user(&user.id)
            .await
            .map_err(|SessionError::Store(cause)| LoginError::Session(cause))?;

        let redirect = match user.role {
            Role::Admin => Redirect::AdminHome,
            Role::User => Redirect::UserHome,
        };
        Ok(LoginSuccess {
            user_id: user.id,
            redirect,
        })
    }

    /// Route the caller's home-page request based on session identity.
    ///
    /// Anonymous or tampered sessions are sent back to the login form.
    pub async fn user_home<T>(&self, session: &T) -> Result<Redirect, SessionError>
    where
        T: SessionStore + ?Sized,
    {
        match SessionContext::new(session).user_id().await? {
            Some(_) => Ok(Redirect::UserHome),
            None => Ok(Redirect::Login),
        }
    }

    /// Whether the session carries an authenticated identity.
    pub async fn require_session<T>(&self, session: &T) -> Result<bool, SessionError>
    where
        T: SessionStore + ?Sized,
    {
        Ok(SessionContext::new(session).user_id().await?.is_some())
    }
}
