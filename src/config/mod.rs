//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DOPAIR` prefix and nested values use double underscores as separators.
//! Front-end URLs are read separately from the `NEXT_PUBLIC_` variables.
//!
//! # Example
//!
//! ```no_run
//! use dopair::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}:{}", config.server.host, config.server.port);
//! ```

mod access;
mod error;
mod public_urls;
mod server;

pub use access::AccessConfig;
pub use error::{ConfigError, ValidationError};
pub use public_urls::PublicUrls;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Access gate and CORS test endpoint settings
    #[serde(default)]
    pub access: AccessConfig,

    /// Front-end URLs from `NEXT_PUBLIC_*`
    #[serde(skip)]
    pub public_urls: PublicUrls,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DOPAIR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Reads `NEXT_PUBLIC_*` front-end URLs
    ///
    /// # Environment Variable Format
    ///
    /// - `DOPAIR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `DOPAIR__ACCESS__ALLOWED_STATUSES=premium` -> `access.allowed_statuses = "premium"`
    /// - `NEXT_PUBLIC_APP_URL=https://dopair.app` -> `public_urls.app_url`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DOPAIR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.public_urls = PublicUrls::load()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.access.validate()?;
        self.public_urls.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Origins allowed to call the API routes.
    ///
    /// Explicit `server.cors_origins` first, then the public front-end URLs,
    /// without duplicates.
    pub fn api_cors_origins(&self) -> Vec<String> {
        let mut origins = self.server.cors_origins_list();
        for origin in self.public_urls.origins() {
            if !origins.contains(&origin) {
                origins.push(origin);
            }
        }
        origins
    }
}
