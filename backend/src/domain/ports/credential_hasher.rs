//! Port abstraction for one-way credential hashing.

/// Errors raised while producing a password digest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    /// The underlying key-derivation function failed.
    #[error("credential hashing failed: {message}")]
    Kdf {
        /// Adapter-supplied description of the failure.
        message: String,
    },
}

impl HashError {
    /// Build a [`HashError::Kdf`] error.
    pub fn kdf(message: impl Into<String>) -> Self {
        Self::Kdf {
            message: message.into(),
        }
    }
}

/// One-way transform of plaintext passwords into storable digests.
///
/// Implementations must use a slow, salted KDF; `hash` produces a fresh salt
/// per call, so two digests of the same plaintext differ in raw bytes while
/// `verify` still accepts both. `verify` fails closed: a malformed stored
/// digest yields `false`, never an error.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Derive a storable digest from `plaintext`.
    fn hash(&self, plaintext: &str) -> Result<String, HashError>;

    /// Compare `plaintext` against a stored `digest`.
    fn verify(&self, plaintext: &str, digest: &str) -> bool;
}
