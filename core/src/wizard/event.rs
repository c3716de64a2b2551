use serde::{Deserialize, Serialize};

use crate::domain::{AccountKind, DraftField, ResolvedAddress};

use super::state::WizardState;
use super::step::WizardStep;

/// Input accepted by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardEvent {
    /// Raw keystroke-level input for a field
    FieldChanged { field: DraftField, value: String },
    AccountKindSelected(AccountKind),
    /// "Próximo"
    Advance,
    /// "Anterior"
    Back,
    /// Address returned by the postal-code lookup
    AddressResolved(ResolvedAddress),
    /// Validate every field, as done before submitting
    ValidateAll,
    SubmissionStarted,
    SubmissionSettled,
    /// Discard the draft and start over
    Reset,
}

/// What an event did to the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StepOutcome {
    Updated,
    Advanced { from: WizardStep, to: WizardStep },
    /// The step stays; `notice` is shown to the user
    Blocked { notice: &'static str },
    /// First advance swallowed by the compatibility flag
    Suppressed,
    /// Valid advance on the terminal step
    ReadyToSubmit,
    Retreated { from: WizardStep, to: WizardStep },
    AddressApplied,
    Validated { valid: bool },
    Submitting,
    Settled,
    Cleared,
}

/// Result of [`WizardState::transition`]
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: WizardState,
    pub outcome: StepOutcome,
}
