//! Registration submission module
//!
//! This module drives the final step of the wizard:
//! - Pre-submission checks (terminal step, validation, service category)
//! - Posting the registration payload
//! - Mapping the server's status line to an outcome and a login redirect
//! - Loading the provider service categories

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::RegistrationServiceConfig;
pub use service::RegistrationService;
pub use traits::{RegistrationApiTrait, ServiceCatalogTrait};
pub use types::SubmissionOutcome;
