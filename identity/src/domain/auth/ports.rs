use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::CredentialStoreError;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::CredentialId;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::TokenPair;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and mint an access/refresh token pair.
    ///
    /// # Arguments
    /// * `email` - Login identifier
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// Freshly issued token pair with the credential id as subject
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (uniform)
    /// * `Store` - The credential store failed; never retried here
    /// * `Hashing` - Password verification could not run
    /// * `TokenIssuance` - Signing failed
    async fn login(&self, email: &EmailAddress, password: &str) -> Result<TokenPair, AuthError>;

    /// Resolve an authenticated principal back to its credential.
    ///
    /// # Arguments
    /// * `id` - Subject identity carried by a validated token
    ///
    /// # Errors
    /// * `NotFound` - No credential with this identity
    /// * `Store` - The credential store failed
    async fn credential(&self, id: &CredentialId) -> Result<Credential, AuthError>;
}

/// Lookup contract implemented by the external credential store.
///
/// `None` is the not-found signal; errors are infrastructure failures.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a credential by login identifier.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credential>, CredentialStoreError>;

    /// Retrieve a credential by unique identity.
    async fn find_by_id(
        &self,
        id: &CredentialId,
    ) -> Result<Option<Credential>, CredentialStoreError>;
}
