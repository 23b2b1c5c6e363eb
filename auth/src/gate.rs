use crate::token::TokenValidator;

/// Authenticated subject attached to a single in-flight request.
///
/// Created on admission, scoped to that request, discarded with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
}

/// Terminal outcome of gating one request.
///
/// Rejection is deliberately opaque: the specific validation failure is
/// logged internally and must not be echoed to the caller.
#[derive(Debug)]
pub enum GateOutcome {
    Admitted(Principal),
    Rejected,
}

/// Request interceptor enforcing authentication before protected logic runs.
///
/// A pure pipeline stage over the raw `Authorization` header value, kept
/// independent of any transport framework; HTTP layers adapt it into their
/// own middleware.
pub struct AuthGate {
    validator: TokenValidator,
}

impl AuthGate {
    pub fn new(validator: TokenValidator) -> Self {
        Self { validator }
    }

    /// Evaluate one request's authorization header.
    ///
    /// The header must be exactly `Bearer <token>` (scheme matched
    /// case-insensitively). Any other shape, and any validation failure,
    /// rejects the request; the downstream handler must not run on a
    /// rejection.
    pub fn evaluate(&self, authorization: Option<&str>) -> GateOutcome {
        let Some(header) = authorization else {
            tracing::warn!("Missing authorization header");
            return GateOutcome::Rejected;
        };

        let Some(token) = parse_bearer(header) else {
            tracing::warn!("Authorization header is not a bearer credential");
            return GateOutcome::Rejected;
        };

        match self.validator.validate(token) {
            Ok(claims) => GateOutcome::Admitted(Principal {
                subject: claims.sub,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Token validation failed");
                GateOutcome::Rejected
            }
        }
    }
}

/// Extract the token from a `Bearer <token>` header value.
///
/// Exactly two space-delimited parts with a non-empty token; anything else
/// is not a bearer credential.
fn parse_bearer(header: &str) -> Option<&str> {
    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() != 2 {
        return None;
    }
    if !parts[0].eq_ignore_ascii_case("Bearer") {
        return None;
    }
    if parts[1].is_empty() {
        return None;
    }

    Some(parts[1])
}
