use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by every issued token.
///
/// Timestamps are Unix seconds. Claims are constructed fresh on each issuance
/// and never mutated; invariants `nbf <= iat` and `exp > iat` hold for any
/// positive TTL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user/entity identifier)
    #[serde(default)]
    pub sub: String,

    /// Issued at
    pub iat: i64,

    /// Not before
    pub nbf: i64,

    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Build claims for a subject, valid from `issued_at` until
    /// `issued_at + ttl`.
    pub fn new(subject: impl Into<String>, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();

        Self {
            sub: subject.into(),
            iat,
            nbf: iat,
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Whether the token has expired at `now` (exactly at `exp` counts as
    /// expired).
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.exp
    }

    /// Whether the token's validity window has not started at `now`.
    pub fn is_not_yet_valid(&self, now: i64) -> bool {
        now < self.nbf
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_new_claims_window() {
        let issued_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let claims = Claims::new("user123", issued_at, Duration::minutes(15));

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.nbf, claims.iat);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_expiry_boundary() {
        let issued_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let claims = Claims::new("user123", issued_at, Duration::seconds(60));

        assert!(!claims.is_expired(claims.exp - 1));
        assert!(claims.is_expired(claims.exp));
        assert!(claims.is_expired(claims.exp + 1));
    }

    #[test]
    fn test_not_before_boundary() {
        let issued_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let claims = Claims::new("user123", issued_at, Duration::seconds(60));

        assert!(claims.is_not_yet_valid(claims.nbf - 1));
        assert!(!claims.is_not_yet_valid(claims.nbf));
    }

    #[test]
    fn test_missing_subject_deserializes_empty() {
        let claims: Claims =
            serde_json::from_str(r#"{"iat":1000,"nbf":1000,"exp":2000}"#).unwrap();
        assert!(claims.sub.is_empty());
    }
}
