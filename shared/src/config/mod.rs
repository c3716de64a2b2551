//! Configuration module with business-specific sub-modules
//!
//! - `api` - Marketplace API and postal-code lookup endpoints
//! - `environment` - Environment detection and logging configuration
//! - `registration` - Registration flow and session cookie settings

pub mod api;
pub mod environment;
pub mod registration;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use api::{ApiConfig, LookupConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use registration::{RegistrationConfig, SessionConfig};

/// Complete client configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Marketplace API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Postal-code lookup configuration
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Registration flow configuration
    #[serde(default)]
    pub registration: RegistrationConfig,

    /// Session cookie configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            api: ApiConfig::default(),
            lookup: LookupConfig::default(),
            registration: RegistrationConfig::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self::default()
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig::new("https://api.uezcompany.com.br"),
            logging: LoggingConfig::for_environment(Environment::Production),
            ..Default::default()
        }
    }

    /// Load configuration from environment
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        let mut config = match env {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        };

        config.apply_env_overrides(|name| std::env::var(name).ok());
        config
    }

    /// Override single endpoint settings from `UEZ_API_URL`,
    /// `UEZ_API_TIMEOUT_SECS` and `UEZ_CEP_URL_TEMPLATE`, keeping the rest
    /// of each section
    pub fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = var("UEZ_API_URL") {
            self.api.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(timeout_secs) = var("UEZ_API_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.api.timeout_secs = timeout_secs;
        }
        if let Some(template) = var("UEZ_CEP_URL_TEMPLATE") {
            self.lookup.url_template = template;
        }
    }
}
