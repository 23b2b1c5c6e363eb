use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;
use serde::Deserialize;

use super::claims::Claims;
use super::errors::TokenError;
use crate::clock::Clock;

/// Verifies signature, algorithm family, and time-validity of a presented
/// token, and extracts its claims.
///
/// Validation is a pure function of (token, secret, injected clock): no
/// network, no storage. The library's own time checks are disabled and
/// re-done against the injected clock so expiry is deterministic under
/// simulated time.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    clock: Arc<dyn Clock>,
}

/// Header fields needed for the algorithm check, parsed ahead of signature
/// verification so a downgraded algorithm is reported as a signature
/// failure, not a parse failure.
#[derive(Debug, Deserialize)]
struct RawHeader {
    #[serde(default)]
    alg: String,
}

impl TokenValidator {
    /// Create a new token validator.
    ///
    /// # Arguments
    /// * `secret` - Symmetric secret the tokens were signed with
    /// * `clock` - Time source for the `nbf`/`exp` checks
    ///
    /// # Errors
    /// * `MissingSecret` - The secret is empty
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret),
            clock,
        })
    }

    /// Validate a token and extract its claims.
    ///
    /// Checks run in a fixed order: structure, algorithm family, signature,
    /// not-before, expiry, subject presence.
    ///
    /// # Errors
    /// * `Malformed` - Structure, encoding, or JSON shape is invalid
    /// * `SignatureInvalid` - Algorithm outside the HMAC family (including
    ///   `none`) or signature mismatch
    /// * `NotYetValid` - Current time is before `nbf`
    /// * `Expired` - Current time is at or past `exp`
    /// * `ClaimsInvalid` - Subject claim is absent or empty
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let algorithm = declared_algorithm(token)?;

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::SignatureInvalid
                }
                _ => TokenError::Malformed(e.to_string()),
            })?;

        let claims = token_data.claims;
        let now = self.clock.now().timestamp();

        if claims.is_not_yet_valid(now) {
            return Err(TokenError::NotYetValid);
        }
        if claims.is_expired(now) {
            return Err(TokenError::Expired);
        }
        if claims.sub.is_empty() {
            return Err(TokenError::ClaimsInvalid("missing subject".to_string()));
        }

        Ok(claims)
    }
}

/// Parse the declared algorithm out of the token header.
///
/// Only the HMAC family is accepted; any other declared algorithm, `none`
/// included, fails as a bad signature.
fn declared_algorithm(token: &str) -> Result<Algorithm, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Malformed(format!(
            "expected 3 segments, got {}",
            segments.len()
        )));
    }

    let header_bytes = URL_SAFE_NO_PAD
        .decode(segments[0])
        .map_err(|e| TokenError::Malformed(format!("header is not base64url: {e}")))?;
    let header: RawHeader = serde_json::from_slice(&header_bytes)
        .map_err(|e| TokenError::Malformed(format!("header is not valid JSON: {e}")))?;

    match header.alg.as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(TokenError::SignatureInvalid),
    }
}
