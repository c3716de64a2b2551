//! # Infrastructure Layer
//!
//! Concrete implementations of the traits declared by `uez_core`:
//!
//! - **HTTP**: [`UezApiClient`] for the marketplace REST API (registration,
//!   service catalogue, chat creation, notifications)
//! - **ViaCEP**: [`ViaCepClient`] for postal-code lookup
//! - **Session**: access-token extraction from a `Cookie` header

pub mod http;
pub mod session;
pub mod viacep;

pub use http::UezApiClient;
pub use session::access_token_from_cookies;
pub use viacep::{ViaCepClient, ViaCepResponse};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Transport failure or unreadable response body
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status without a usable message
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body that does not match the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input that cannot be placed in a request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Build a reqwest client; `timeout_secs == 0` keeps the transport default
pub(crate) fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, InfrastructureError> {
    let mut builder = reqwest::Client::builder();
    if timeout_secs > 0 {
        builder = builder.timeout(std::time::Duration::from_secs(timeout_secs));
    }
    Ok(builder.build()?)
}
