use std::env;

use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub access_ttl_minutes: i64,
    pub refresh_ttl_hours: i64,
}

/// Fatal configuration problems. A process seeing one of these must not
/// serve traffic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthConfigError {
    #[error("Signing secret must not be empty")]
    MissingSecret,

    #[error("{field} must be positive, got {value}")]
    InvalidTtl { field: &'static str, value: i64 },
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH__SECRET, AUTH__ACCESS_TTL_MINUTES, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: AUTH__SECRET=... overrides auth.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

impl AuthConfig {
    /// Check the invariants the authentication stack is built on.
    ///
    /// # Errors
    /// * `MissingSecret` - The signing secret is empty
    /// * `InvalidTtl` - A token TTL is zero or negative
    pub fn validate(&self) -> Result<(), AuthConfigError> {
        if self.secret.is_empty() {
            return Err(AuthConfigError::MissingSecret);
        }
        if self.access_ttl_minutes <= 0 {
            return Err(AuthConfigError::InvalidTtl {
                field: "access_ttl_minutes",
                value: self.access_ttl_minutes,
            });
        }
        if self.refresh_ttl_hours <= 0 {
            return Err(AuthConfigError::InvalidTtl {
                field: "refresh_ttl_hours",
                value: self.refresh_ttl_hours,
            });
        }

        Ok(())
    }

    /// Access token validity window.
    pub fn access_ttl(&self) -> Duration {
        Duration::minutes(self.access_ttl_minutes)
    }

    /// Refresh token validity window.
    pub fn refresh_ttl(&self) -> Duration {
        Duration::hours(self.refresh_ttl_hours)
    }
}
