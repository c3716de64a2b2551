//! Domain entities

pub mod provider_card;
pub mod registration_draft;
pub mod service_category;

pub use provider_card::ProviderCard;
pub use registration_draft::{AccountKind, Address, DraftField, RegistrationDraft};
pub use service_category::ServiceCategory;
