//! Authentication primitives library
//!
//! Provides the security-sensitive building blocks for service authentication:
//! - Password hashing (Argon2id)
//! - Signed, time-bounded token issuance and validation (HMAC)
//! - A transport-independent request gate for bearer credentials
//!
//! The signing secret and the clock are injected at construction so every
//! operation is a pure function of its inputs. Services adapt these types
//! behind their own ports rather than sharing domain logic.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("wrong_password", &digest));
//! ```
//!
//! ## Tokens
//! ```
//! use std::sync::Arc;
//!
//! use auth::Clock;
//! use auth::SystemClock;
//! use auth::TokenIssuer;
//! use auth::TokenValidator;
//!
//! let clock: Arc<dyn Clock> = Arc::new(SystemClock);
//! let secret = b"secret_key_at_least_32_bytes_long!";
//!
//! let issuer = TokenIssuer::new(secret, Arc::clone(&clock)).unwrap();
//! let token = issuer.issue("user123", chrono::Duration::minutes(15)).unwrap();
//!
//! let validator = TokenValidator::new(secret, clock).unwrap();
//! let claims = validator.validate(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```
//!
//! ## Gating a request
//! ```
//! use std::sync::Arc;
//!
//! use auth::AuthGate;
//! use auth::Clock;
//! use auth::GateOutcome;
//! use auth::SystemClock;
//! use auth::TokenIssuer;
//! use auth::TokenValidator;
//!
//! let clock: Arc<dyn Clock> = Arc::new(SystemClock);
//! let secret = b"secret_key_at_least_32_bytes_long!";
//!
//! let issuer = TokenIssuer::new(secret, Arc::clone(&clock)).unwrap();
//! let token = issuer.issue("user123", chrono::Duration::minutes(15)).unwrap();
//!
//! let gate = AuthGate::new(TokenValidator::new(secret, clock).unwrap());
//! let header = format!("Bearer {token}");
//! match gate.evaluate(Some(&header)) {
//!     GateOutcome::Admitted(principal) => assert_eq!(principal.subject, "user123"),
//!     GateOutcome::Rejected => panic!("expected admission"),
//! }
//! ```

pub mod clock;
pub mod gate;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use clock::Clock;
pub use clock::SystemClock;
pub use gate::AuthGate;
pub use gate::GateOutcome;
pub use gate::Principal;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenValidator;
