//! Traits for the marketplace API integration

use async_trait::async_trait;
use uez_shared::types::MessageResponse;

use crate::domain::{RegistrationRequest, ServiceCategory};

/// Trait for the registration endpoint
#[async_trait]
pub trait RegistrationApiTrait: Send + Sync {
    /// Post a registration and return the server's status line.
    ///
    /// Server-side rejections that still carry a message are `Ok`;
    /// `Err` is reserved for transport and decoding failures.
    async fn register(&self, request: &RegistrationRequest) -> Result<MessageResponse, String>;
}

/// Trait for the service catalogue endpoint
#[async_trait]
pub trait ServiceCatalogTrait: Send + Sync {
    /// List the service categories a provider can offer
    async fn list_services(&self) -> Result<Vec<ServiceCategory>, String>;
}
