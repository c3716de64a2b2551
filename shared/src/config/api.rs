//! Remote endpoint configuration

use serde::{Deserialize, Serialize};

/// Marketplace REST API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the marketplace API (no trailing slash)
    pub base_url: String,

    /// Request timeout in seconds (0 = transport default)
    #[serde(default)]
    pub timeout_secs: u64,

    /// Path of the notification dispatch endpoint
    #[serde(default = "default_notification_path")]
    pub notification_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:3333"),
            timeout_secs: 0,
            notification_path: default_notification_path(),
        }
    }
}

impl ApiConfig {
    /// Create a new API configuration with a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let base_url = std::env::var("UEZ_API_URL")
            .unwrap_or_else(|_| Self::default().base_url);
        let timeout_secs = std::env::var("UEZ_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Self {
            timeout_secs,
            ..Self::new(base_url)
        }
    }

    /// Join a path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Postal-code lookup service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// URL template; `{cep}` is replaced by the eight postal-code digits
    pub url_template: String,

    /// Request timeout in seconds (0 = transport default)
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            url_template: String::from("https://viacep.com.br/ws/{cep}/json/"),
            timeout_secs: 0,
        }
    }
}

impl LookupConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            url_template: std::env::var("UEZ_CEP_URL_TEMPLATE")
                .unwrap_or_else(|_| Self::default().url_template),
            ..Default::default()
        }
    }

    /// Render the lookup URL for a postal code
    pub fn url_for(&self, cep: &str) -> String {
        self.url_template.replace("{cep}", cep)
    }
}

fn default_notification_path() -> String {
    String::from("/notification")
}
