//! Registration flow and session configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Registration submission configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationConfig {
    /// Substring of the server's status message that denotes success
    #[serde(default = "default_success_marker")]
    pub success_marker: String,

    /// Delay before following the post-registration redirect, in milliseconds
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,

    /// Login page the user is sent to after registering
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Swallow the very first advance request (legacy form behaviour)
    #[serde(default)]
    pub suppress_first_advance: bool,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            success_marker: default_success_marker(),
            redirect_delay_ms: default_redirect_delay_ms(),
            login_path: default_login_path(),
            suppress_first_advance: false,
        }
    }
}

impl RegistrationConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Name of the cookie holding the bearer access token
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_success_marker() -> String {
    String::from("sucesso")
}

fn default_redirect_delay_ms() -> u64 {
    4000
}

fn default_login_path() -> String {
    String::from("/login")
}

fn default_cookie_name() -> String {
    String::from("uezaccesstoken")
}
