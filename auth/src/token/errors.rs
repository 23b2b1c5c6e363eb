use thiserror::Error;

/// Error type for token operations.
///
/// Validation kinds carry enough detail for internal logging; callers facing
/// untrusted clients are expected to collapse them into a single generic
/// unauthorized response.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Signing secret must not be empty")]
    MissingSecret,

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Token is not yet valid")]
    NotYetValid,

    #[error("Token is expired")]
    Expired,

    #[error("Token claims are invalid: {0}")]
    ClaimsInvalid(String),
}
