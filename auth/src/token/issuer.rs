use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::TokenError;
use crate::clock::Clock;

/// Mints signed, time-bounded tokens for a subject.
///
/// Signs with HS256. The secret and the clock are injected at construction;
/// an access token and a refresh token are the same mechanism issued with
/// different TTLs.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret (should be at least 32 bytes)
    /// * `clock` - Time source for the issued-at instant
    ///
    /// # Errors
    /// * `MissingSecret` - The secret is empty; a fatal misconfiguration
    ///   caught here so `issue` never observes it
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            clock,
        })
    }

    /// Issue a signed token for `subject`, valid from now for `ttl`.
    ///
    /// # Arguments
    /// * `subject` - Identifier placed in the `sub` claim
    /// * `ttl` - Validity duration; must be positive
    ///
    /// # Returns
    /// Encoded token string
    ///
    /// # Errors
    /// * `SigningFailed` - The TTL is not positive or the sign operation
    ///   failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        if ttl <= Duration::zero() {
            return Err(TokenError::SigningFailed(format!(
                "ttl must be positive, got {}s",
                ttl.num_seconds()
            )));
        }

        let claims = Claims::new(subject, self.clock.now(), ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }
}
