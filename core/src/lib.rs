//! # UEZ Core
//!
//! Domain layer of the UEZ Company marketplace client: the registration
//! draft and its validation schema, the wizard state machine, and the
//! services that submit registrations, resolve postal codes and open chats
//! with providers. Remote systems are reached through the traits declared
//! next to each service.

pub mod domain;
pub mod errors;
pub mod services;
pub mod validation;
pub mod wizard;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
pub use wizard::{StepOutcome, Transition, WizardEvent, WizardOptions, WizardState, WizardStep};
