//! Application services orchestrating the wizard and the remote API

pub mod address;
pub mod contact;
pub mod registration;

pub use address::{AddressLookupService, AddressLookupTrait, LookupOutcome};
pub use contact::{ChatApiTrait, ChatNavigation, ContactService, NotificationTrait};
pub use registration::{
    RegistrationApiTrait, RegistrationService, RegistrationServiceConfig, ServiceCatalogTrait,
    SubmissionOutcome,
};
