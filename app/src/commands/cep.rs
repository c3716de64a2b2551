use anyhow::{bail, Result};
use std::sync::Arc;
use uez_core::services::{AddressLookupService, LookupOutcome};
use uez_core::{DraftField, WizardEvent, WizardOptions, WizardState};
use uez_infra::ViaCepClient;
use uez_shared::config::AppConfig;

pub async fn resolve(config: &AppConfig, code: &str) -> Result<()> {
    let lookup = AddressLookupService::new(Arc::new(ViaCepClient::new(config.lookup.clone())?));

    let mut state = WizardState::new(WizardOptions::default());
    state.apply(WizardEvent::FieldChanged {
        field: DraftField::PostalCode,
        value: code.to_string(),
    });

    match lookup.fill_address(&mut state).await {
        LookupOutcome::Filled => {
            let draft = state.draft();
            println!("CEP:    {}", draft.postal_code);
            println!("Rua:    {}", draft.address.street);
            println!("Bairro: {}", draft.address.neighborhood);
            println!("Cidade: {} - {}", draft.address.city, draft.address.state);
            Ok(())
        }
        LookupOutcome::NotFound => bail!("CEP {} não encontrado", state.draft().postal_code),
        LookupOutcome::Failed { reason } => bail!("Falha ao consultar o CEP: {}", reason),
        LookupOutcome::Skipped | LookupOutcome::InvalidPostalCode => {
            bail!("CEP inválido: informe os 8 dígitos")
        }
    }
}
