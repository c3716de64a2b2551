//! Trait for postal-code lookup integration

use async_trait::async_trait;

use crate::domain::ResolvedAddress;

/// Trait for a postal-code directory
#[async_trait]
pub trait AddressLookupTrait: Send + Sync {
    /// Resolve an 8-digit CEP.
    ///
    /// `Ok(None)` means the directory answered but knows no such code.
    async fn lookup(&self, cep_digits: &str) -> Result<Option<ResolvedAddress>, String>;
}
