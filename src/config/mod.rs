//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `LIFEDESK` prefix and
//! `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use lifedesk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod messaging;
mod server;

pub use auth::AuthConfig;
pub use database::{DatabaseBackend, DatabaseConfig};
pub use error::{ConfigError, ValidationError};
pub use messaging::MessagingConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`], then call [`AppConfig::validate()`].
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    /// Event exchange; optional broker
    #[serde(default)]
    pub messaging: MessagingConfig,

    /// Bearer token verification
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file is read first when present. Nested keys use `__`:
    ///
    /// - `LIFEDESK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `LIFEDESK__DATABASE__BACKEND=memory` -> `database.backend = memory`
    /// - `LIFEDESK__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LIFEDESK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of every section.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.messaging.validate()?;
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
