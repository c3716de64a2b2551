//! Main registration service implementation

use std::sync::Arc;
use uez_shared::utils::phone::mask_phone;

use crate::domain::{Redirect, RegistrationRequest, ServiceCategory};
use crate::errors::{DomainError, DomainResult, SubmissionError};
use crate::wizard::{WizardEvent, WizardState};

use super::config::RegistrationServiceConfig;
use super::traits::{RegistrationApiTrait, ServiceCatalogTrait};
use super::types::SubmissionOutcome;

/// Registration service submitting completed wizard drafts
pub struct RegistrationService<R: RegistrationApiTrait, C: ServiceCatalogTrait> {
    /// Registration endpoint client
    api: Arc<R>,
    /// Service catalogue client
    catalog: Arc<C>,
    /// Service configuration
    config: RegistrationServiceConfig,
}

impl<R: RegistrationApiTrait, C: ServiceCatalogTrait> RegistrationService<R, C> {
    /// Create a new registration service
    ///
    /// # Arguments
    ///
    /// * `api` - Registration endpoint implementation
    /// * `catalog` - Service catalogue implementation
    /// * `config` - Service configuration
    pub fn new(api: Arc<R>, catalog: Arc<C>, config: RegistrationServiceConfig) -> Self {
        Self { api, catalog, config }
    }

    pub fn config(&self) -> &RegistrationServiceConfig {
        &self.config
    }

    /// Submit the wizard's draft
    ///
    /// This method:
    /// 1. Checks the wizard is on its terminal step with nothing in flight
    /// 2. Rejects provider drafts without a service category
    /// 3. Validates every field and the password confirmation
    /// 4. Posts the registration while the wizard is marked as submitting
    /// 5. Maps the server's status line to an outcome
    ///
    /// The exclusive borrow of `state` is held across the request, so a second
    /// submission for the same wizard cannot start until this one settles.
    ///
    /// # Returns
    ///
    /// * `Ok(SubmissionOutcome::Registered)` - Server confirmed; the wizard is reset
    /// * `Ok(SubmissionOutcome::Rejected)` - Server refused; the draft is kept
    /// * `Err(DomainError::Submission)` - Submission was not attempted
    /// * `Err(DomainError::Remote)` - The request itself failed
    pub async fn submit(&self, state: &mut WizardState) -> DomainResult<SubmissionOutcome> {
        let kind = match state.submission_check() {
            Ok(kind) => kind,
            Err(err) => {
                if matches!(
                    err,
                    SubmissionError::Invalid { .. } | SubmissionError::PasswordMismatch
                ) {
                    state.apply(WizardEvent::ValidateAll);
                }
                tracing::info!(
                    step = state.step().number(),
                    reason = %err,
                    event = "registration_not_submitted",
                    "Registration submission refused before sending"
                );
                return Err(err.into());
            }
        };

        let request = RegistrationRequest::from_draft(state.draft(), kind);
        state.apply(WizardEvent::SubmissionStarted);

        tracing::info!(
            username = %request.username,
            usertype = %kind,
            phone = %mask_phone(&request.telefone),
            event = "registration_submitted",
            "Submitting registration"
        );

        let result = self.api.register(&request).await;
        state.apply(WizardEvent::SubmissionSettled);

        let response = result.map_err(|e| {
            tracing::error!(
                username = %request.username,
                error = %e,
                event = "registration_request_failed",
                "Registration request failed"
            );
            DomainError::Remote { message: e }
        })?;

        if !response.contains_marker(&self.config.success_marker) {
            tracing::warn!(
                username = %request.username,
                message = %response.message,
                event = "registration_rejected",
                "Server rejected the registration"
            );
            return Ok(SubmissionOutcome::Rejected {
                message: response.message,
            });
        }

        let redirect = Redirect::to_login(
            &self.config.login_path,
            &request.email,
            self.config.redirect_delay,
        );
        state.apply(WizardEvent::Reset);

        tracing::info!(
            username = %request.username,
            location = %redirect.location,
            event = "registration_completed",
            "Registration completed"
        );

        Ok(SubmissionOutcome::Registered {
            message: response.message,
            redirect,
        })
    }

    /// Load the service categories offered to providers on the last step.
    ///
    /// A failing catalogue degrades to an empty list.
    pub async fn load_service_options(&self) -> Vec<ServiceCategory> {
        match self.catalog.list_services().await {
            Ok(services) => {
                tracing::debug!(count = services.len(), event = "services_loaded", "Loaded service categories");
                services
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    event = "services_load_failed",
                    "Failed to load service categories"
                );
                Vec::new()
            }
        }
    }
}
