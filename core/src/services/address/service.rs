//! Postal-code lookup service implementation

use std::sync::Arc;
use uez_shared::utils::document::cep_digits;

use crate::wizard::{WizardEvent, WizardState};

use super::traits::AddressLookupTrait;
use super::types::LookupOutcome;

/// Fills the address step from a postal-code directory
pub struct AddressLookupService<L: AddressLookupTrait> {
    lookup: Arc<L>,
}

impl<L: AddressLookupTrait> AddressLookupService<L> {
    pub fn new(lookup: Arc<L>) -> Self {
        Self { lookup }
    }

    /// Look up the draft's postal code and overwrite the derived address
    /// fields on success.
    ///
    /// Failures leave the draft untouched and never block the wizard.
    pub async fn fill_address(&self, state: &mut WizardState) -> LookupOutcome {
        let typed = state.draft().postal_code.trim();
        if typed.is_empty() {
            return LookupOutcome::Skipped;
        }

        let Some(digits) = cep_digits(typed) else {
            tracing::debug!(cep = typed, event = "cep_lookup_skipped", "Postal code is incomplete");
            return LookupOutcome::InvalidPostalCode;
        };

        match self.lookup.lookup(&digits).await {
            Ok(Some(address)) => {
                tracing::info!(
                    cep = %digits,
                    city = %address.city,
                    state = %address.state,
                    event = "cep_resolved",
                    "Address resolved from postal code"
                );
                state.apply(WizardEvent::AddressResolved(address));
                LookupOutcome::Filled
            }
            Ok(None) => {
                tracing::warn!(cep = %digits, event = "cep_not_found", "Postal code not found");
                LookupOutcome::NotFound
            }
            Err(e) => {
                tracing::warn!(
                    cep = %digits,
                    error = %e,
                    event = "cep_lookup_failed",
                    "Postal code lookup failed"
                );
                LookupOutcome::Failed { reason: e }
            }
        }
    }
}
