use thiserror::Error;

/// Error for CredentialId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Failures reported by the external credential store.
///
/// Not-found is expressed through `Option`, never through this type; these
/// variants are infrastructure failures and must stay distinct from an
/// invalid-credentials outcome.
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    #[error("Credential store unavailable: {0}")]
    Unavailable(String),

    #[error("Credential lookup timed out: {0}")]
    Timeout(String),
}

/// Top-level error for authentication operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Wrong login identifier or wrong password; deliberately a single
    /// variant so callers cannot distinguish the two.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Credential not found: {0}")]
    NotFound(String),

    #[error("Credential store error: {0}")]
    Store(#[from] CredentialStoreError),

    #[error("Password verification failed to run: {0}")]
    Hashing(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),
}

impl From<auth::TokenError> for AuthError {
    fn from(err: auth::TokenError) -> Self {
        AuthError::TokenIssuance(err.to_string())
    }
}
