//! Configuration for the registration service

use std::time::Duration;
use uez_shared::config::RegistrationConfig;

/// Configuration for the registration service
#[derive(Debug, Clone)]
pub struct RegistrationServiceConfig {
    /// Substring of the server message that denotes success
    pub success_marker: String,
    /// Wait before following the login redirect
    pub redirect_delay: Duration,
    /// Login page receiving the registered email
    pub login_path: String,
}

impl Default for RegistrationServiceConfig {
    fn default() -> Self {
        RegistrationConfig::default().into()
    }
}

impl From<&RegistrationConfig> for RegistrationServiceConfig {
    fn from(config: &RegistrationConfig) -> Self {
        Self {
            success_marker: config.success_marker.clone(),
            redirect_delay: config.redirect_delay(),
            login_path: config.login_path.clone(),
        }
    }
}

impl From<RegistrationConfig> for RegistrationServiceConfig {
    fn from(config: RegistrationConfig) -> Self {
        (&config).into()
    }
}
