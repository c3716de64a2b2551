//! Postal-code lookup module
//!
//! Resolves the CEP typed on the address step into street, neighborhood,
//! city and state, and writes them into the wizard's draft.

mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use service::AddressLookupService;
pub use traits::AddressLookupTrait;
pub use types::LookupOutcome;
