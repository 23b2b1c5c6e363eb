use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::CredentialId;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::TokenPair;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialStore;

/// Login orchestrator.
///
/// Composes the credential store lookup, password verification, and token
/// issuance into the login operation. Stateless across requests; the store,
/// issuer, and TTLs are fixed at construction.
pub struct AuthService<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    issuer: TokenIssuer,
    password_hasher: PasswordHasher,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl<S> AuthService<S>
where
    S: CredentialStore,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential lookup implementation
    /// * `issuer` - Token issuer holding the signing secret and clock
    /// * `access_ttl` - Access token validity window
    /// * `refresh_ttl` - Refresh token validity window
    pub fn new(store: Arc<S>, issuer: TokenIssuer, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            store,
            issuer,
            password_hasher: PasswordHasher::new(),
            access_ttl,
            refresh_ttl,
        }
    }
}

#[async_trait]
impl<S> AuthServicePort for AuthService<S>
where
    S: CredentialStore,
{
    async fn login(&self, email: &EmailAddress, password: &str) -> Result<TokenPair, AuthError> {
        // An unknown email and a wrong password must produce the same
        // outcome; only store failures surface separately.
        let credential = match self.store.find_by_email(email).await {
            Ok(Some(credential)) => credential,
            Ok(None) => {
                tracing::info!(email = %email, "Login rejected: unknown login identifier");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(email = %email, error = %e, "Credential lookup failed");
                return Err(AuthError::Store(e));
            }
        };

        // Argon2 is CPU-bound; run it on the bounded blocking pool so a slow
        // hash cannot stall unrelated requests.
        let hasher = self.password_hasher.clone();
        let stored_hash = credential.password_hash.clone();
        let candidate = password.to_owned();
        let password_matches =
            tokio::task::spawn_blocking(move || hasher.verify(&candidate, &stored_hash))
                .await
                .map_err(|e| AuthError::Hashing(e.to_string()))?;

        if !password_matches {
            tracing::info!(email = %email, "Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let subject = credential.id.to_string();
        let access_token = self.issuer.issue(&subject, self.access_ttl)?;
        let refresh_token = self.issuer.issue(&subject, self.refresh_ttl)?;

        tracing::info!(credential_id = %credential.id, "Login succeeded");

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    async fn credential(&self, id: &CredentialId) -> Result<Credential, AuthError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AuthError::NotFound(id.to_string()))
    }
}
