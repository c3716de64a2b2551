//! Registration from a draft file
//!
//! The draft is typed into the wizard step by step, exactly as the form
//! would receive it, so every step gate and formatter applies.

use anyhow::{bail, Result};
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;
use uez_core::services::{
    AddressLookupService, AddressLookupTrait, RegistrationApiTrait, RegistrationService,
    ServiceCatalogTrait, SubmissionOutcome,
};
use uez_core::{StepOutcome, WizardEvent, WizardOptions, WizardState, WizardStep};
use uez_infra::{UezApiClient, ViaCepClient};
use uez_shared::config::AppConfig;

use super::user_error;
use crate::draft_file::DraftFile;

pub async fn register(config: &AppConfig, path: &Path, wait: bool) -> Result<()> {
    let draft = DraftFile::read(path)?;

    let client = Arc::new(UezApiClient::new(config.api.clone())?);
    let service = RegistrationService::new(client.clone(), client, (&config.registration).into());
    let lookup = AddressLookupService::new(Arc::new(ViaCepClient::new(config.lookup.clone())?));

    let mut state = WizardState::new(WizardOptions {
        suppress_first_advance: config.registration.suppress_first_advance,
    });

    drive_wizard(&mut state, &draft, &lookup).await?;

    match service.submit(&mut state).await.map_err(user_error)? {
        SubmissionOutcome::Registered { message, redirect } => {
            println!("{}", message);
            if wait {
                println!("{}", redirect.wait().await);
            } else {
                println!("{}", redirect.location);
            }
            Ok(())
        }
        SubmissionOutcome::Rejected { message } => bail!(message),
    }
}

/// Feed the draft into the wizard until it is ready to submit
///
/// On the address step a missing street triggers a postal-code lookup first.
/// Returns an error carrying the blocking notice and field messages when a
/// step refuses to advance.
pub async fn drive_wizard<L: AddressLookupTrait>(
    state: &mut WizardState,
    draft: &DraftFile,
    lookup: &AddressLookupService<L>,
) -> Result<()> {
    // one extra round for a suppressed first advance
    for _ in 0..=WizardStep::ServiceCategory.number() {
        let step = state.step();
        for (field, value) in draft.for_step(step) {
            state.apply(WizardEvent::FieldChanged {
                field,
                value: value.to_string(),
            });
        }

        if step == WizardStep::Address && state.draft().address.street.is_empty() {
            let outcome = lookup.fill_address(state).await;
            tracing::debug!(?outcome, "Address lookup before leaving the address step");
        }

        match state.apply(WizardEvent::Advance) {
            StepOutcome::Advanced { from, to } => {
                tracing::debug!(%from, %to, "Wizard advanced");
            }
            StepOutcome::Suppressed => {}
            StepOutcome::ReadyToSubmit => return Ok(()),
            StepOutcome::Blocked { notice } => bail!(blocked_report(notice, state)),
            other => bail!("Unexpected wizard outcome: {:?}", other),
        }
    }

    bail!("Wizard did not reach its last step")
}

fn blocked_report(notice: &str, state: &WizardState) -> String {
    let mut report = format!("{} ({})", notice, state.step());
    for (field, message) in state.errors().iter() {
        let _ = write!(report, "\n  {}: {}", field, message);
    }
    if let Some(message) = state.password_mismatch() {
        let _ = write!(report, "\n  confirmarSenha: {}", message);
    }
    report
}

/// Run the wizard and submit, without touching the terminal
pub async fn run_registration<R, C, L>(
    state: &mut WizardState,
    draft: &DraftFile,
    lookup: &AddressLookupService<L>,
    service: &RegistrationService<R, C>,
) -> Result<SubmissionOutcome>
where
    R: RegistrationApiTrait,
    C: ServiceCatalogTrait,
    L: AddressLookupTrait,
{
    drive_wizard(state, draft, lookup).await?;
    service.submit(state).await.map_err(user_error)
}
