use serde::{Deserialize, Serialize};
use std::mem;

use crate::domain::{AccountKind, DraftField, RegistrationDraft, ResolvedAddress};
use crate::errors::{SubmissionError, BLOCKING_NOTICE, LOADING_NOTICE};
use crate::validation::{self, FieldErrors};

use super::event::{StepOutcome, Transition, WizardEvent};
use super::step::WizardStep;

/// Notice shown when leaving step 1 without choosing an account kind
pub const ACCOUNT_KIND_NOTICE: &str = "Selecione um tipo de usuário";

/// Fields overwritten by a postal-code lookup
const RESOLVED_FIELDS: [DraftField; 5] = [
    DraftField::PostalCode,
    DraftField::Street,
    DraftField::Neighborhood,
    DraftField::City,
    DraftField::State,
];

/// Behaviour switches for the wizard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardOptions {
    /// Ignore the very first "advance", as older clients did
    #[serde(default)]
    pub suppress_first_advance: bool,
}

/// Complete, serializable state of one registration session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    draft: RegistrationDraft,
    step: WizardStep,
    errors: FieldErrors,
    password_mismatch: Option<String>,
    submitting: bool,
    first_advance_pending: bool,
    options: WizardOptions,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(WizardOptions::default())
    }
}

impl WizardState {
    pub fn new(options: WizardOptions) -> Self {
        Self {
            draft: RegistrationDraft::new(),
            step: WizardStep::Identity,
            errors: FieldErrors::new(),
            password_mismatch: None,
            submitting: false,
            first_advance_pending: true,
            options,
        }
    }

    /// Starts on step 1 with a prefilled draft, e.g. an account kind taken
    /// from the entry link
    pub fn with_draft(draft: RegistrationDraft, options: WizardOptions) -> Self {
        Self {
            draft,
            ..Self::new(options)
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn field_error(&self, field: DraftField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Cross-field message for the password confirmation
    pub fn password_mismatch(&self) -> Option<&str> {
        self.password_mismatch.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn options(&self) -> WizardOptions {
        self.options
    }

    pub fn is_terminal_step(&self) -> bool {
        self.draft
            .account_kind
            .map_or(false, |kind| self.step.is_terminal(kind))
    }

    /// Consumes the state and returns its successor
    pub fn transition(mut self, event: WizardEvent) -> Transition {
        let outcome = self.handle(event);
        Transition {
            state: self,
            outcome,
        }
    }

    /// In-place form of [`WizardState::transition`]
    pub fn apply(&mut self, event: WizardEvent) -> StepOutcome {
        let Transition { state, outcome } = mem::take(self).transition(event);
        *self = state;
        outcome
    }

    /// Checks whether the draft may be submitted now.
    ///
    /// Returns the account kind to register on success.
    pub fn submission_check(&self) -> Result<AccountKind, SubmissionError> {
        if self.submitting {
            return Err(SubmissionError::AlreadySubmitting);
        }

        let kind = match self.draft.account_kind {
            Some(kind) if self.step.is_terminal(kind) => kind,
            _ => return Err(SubmissionError::NotTerminalStep { step: self.step }),
        };

        if kind == AccountKind::Provider && self.draft.service_id.trim().is_empty() {
            return Err(SubmissionError::MissingServiceCategory);
        }

        let errors = validation::validate_all(&self.draft);
        if !errors.is_empty() {
            return Err(SubmissionError::Invalid {
                errors: (&errors).into(),
            });
        }

        if validation::passwords_match(&self.draft).is_err() {
            return Err(SubmissionError::PasswordMismatch);
        }

        Ok(kind)
    }

    fn handle(&mut self, event: WizardEvent) -> StepOutcome {
        match event {
            WizardEvent::FieldChanged { field, value } => self.change_field(field, &value),
            WizardEvent::AccountKindSelected(kind) => {
                self.select_kind(Some(kind));
                StepOutcome::Updated
            }
            WizardEvent::Advance => self.advance(),
            WizardEvent::Back => {
                let from = self.step;
                self.step = from.previous();
                StepOutcome::Retreated { from, to: self.step }
            }
            WizardEvent::AddressResolved(address) => {
                self.apply_address(address);
                StepOutcome::AddressApplied
            }
            WizardEvent::ValidateAll => {
                self.errors = validation::validate_all(&self.draft);
                self.password_mismatch = validation::passwords_match(&self.draft)
                    .err()
                    .map(str::to_string);
                StepOutcome::Validated {
                    valid: self.errors.is_empty() && self.password_mismatch.is_none(),
                }
            }
            WizardEvent::SubmissionStarted => {
                if self.submitting {
                    return StepOutcome::Blocked { notice: LOADING_NOTICE };
                }
                self.submitting = true;
                StepOutcome::Submitting
            }
            WizardEvent::SubmissionSettled => {
                self.submitting = false;
                StepOutcome::Settled
            }
            WizardEvent::Reset => {
                *self = Self::new(self.options);
                StepOutcome::Cleared
            }
        }
    }

    fn change_field(&mut self, field: DraftField, value: &str) -> StepOutcome {
        if field == DraftField::AccountKind {
            self.select_kind(value.parse().ok());
            return StepOutcome::Updated;
        }

        self.draft.set(field, value);
        self.revalidate(field);

        match field {
            DraftField::PasswordConfirmation => self.recheck_passwords(),
            DraftField::Password if !self.draft.password_confirmation.is_empty() => {
                self.recheck_passwords()
            }
            _ => {}
        }

        StepOutcome::Updated
    }

    fn select_kind(&mut self, kind: Option<AccountKind>) {
        self.draft.account_kind = kind;
        self.revalidate(DraftField::AccountKind);
        if !self.draft.is_provider() {
            self.errors.clear(DraftField::ServiceId);
        }

        if let Some(kind) = kind {
            let terminal = WizardStep::terminal_for(kind);
            if self.step > terminal {
                tracing::debug!(
                    from = self.step.number(),
                    to = terminal.number(),
                    event = "wizard_step_clamped",
                    "Account kind change moved wizard back to its terminal step"
                );
                self.step = terminal;
            }
        }
    }

    fn advance(&mut self) -> StepOutcome {
        if self.submitting {
            return StepOutcome::Blocked { notice: LOADING_NOTICE };
        }

        if self.options.suppress_first_advance && self.first_advance_pending {
            self.first_advance_pending = false;
            return StepOutcome::Suppressed;
        }

        let from = self.step;
        let step_errors = validation::validate_step(&self.draft, from);
        for &field in from.fields() {
            self.errors
                .record(field, step_errors.get(field).map(str::to_string));
        }

        let kind_missing = step_errors.contains(DraftField::AccountKind);
        if step_errors.len() > usize::from(kind_missing) {
            tracing::debug!(
                step = from.number(),
                invalid_fields = step_errors.len(),
                event = "wizard_advance_blocked",
                "Step has invalid fields"
            );
            return StepOutcome::Blocked { notice: BLOCKING_NOTICE };
        }

        let kind = match self.draft.account_kind {
            Some(kind) if !kind_missing => kind,
            _ => return StepOutcome::Blocked { notice: ACCOUNT_KIND_NOTICE },
        };

        if from == WizardStep::Personal {
            if let Err(message) = validation::passwords_match(&self.draft) {
                self.password_mismatch = Some(message.to_string());
                return StepOutcome::Blocked { notice: message };
            }
            self.password_mismatch = None;
        }

        if from.is_terminal(kind) {
            return StepOutcome::ReadyToSubmit;
        }

        match from.next() {
            Some(to) => {
                self.step = to;
                tracing::debug!(
                    from = from.number(),
                    to = to.number(),
                    event = "wizard_advanced",
                    "Wizard advanced"
                );
                StepOutcome::Advanced { from, to }
            }
            None => StepOutcome::ReadyToSubmit,
        }
    }

    fn apply_address(&mut self, address: ResolvedAddress) {
        self.draft.set(DraftField::PostalCode, &address.postal_code);
        self.draft.set(DraftField::Street, &address.street);
        self.draft.set(DraftField::Neighborhood, &address.neighborhood);
        self.draft.set(DraftField::City, &address.city);
        self.draft.set(DraftField::State, &address.state);

        for field in RESOLVED_FIELDS {
            self.revalidate(field);
        }
    }

    fn revalidate(&mut self, field: DraftField) {
        let message = validation::validate_field(&self.draft, field).map(str::to_string);
        self.errors.record(field, message);
    }

    fn recheck_passwords(&mut self) {
        self.password_mismatch = validation::passwords_match(&self.draft)
            .err()
            .map(str::to_string);
    }
}
