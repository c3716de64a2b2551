//! Shared utilities and common types for the UEZ marketplace client
//!
//! This crate provides common functionality used across all workspace members:
//! - Configuration types
//! - Wire-level response and error envelopes
//! - Field formatters (phone, CPF, CEP, names) and validation primitives

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    ApiConfig, AppConfig, Environment, LogFormat, LoggingConfig, LookupConfig,
    RegistrationConfig, SessionConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{Chat, MessageResponse};
pub use utils::{document, phone, text, validation};
