//! Abstract collaborators consumed by the authentication workflows.
//!
//! In hexagonal terms these are *driven* ports: the auth service calls them
//! without knowing the backing infrastructure, so unit tests can substitute
//! mocks and the (excluded) persistence layer can supply durable adapters.

mod credential_hasher;
mod session_store;
mod user_store;

#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, HashError};
#[cfg(test)]
pub use session_store::MockSessionStore;
pub use session_store::{SessionStore, SessionStoreError};
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{UserStore, UserStoreError};
