use super::*;
use crate::domain::ResolvedAddress;
use crate::errors::{SubmissionError, BLOCKING_NOTICE, LOADING_NOTICE};
use crate::validation::PASSWORD_MISMATCH_MESSAGE;
use crate::wizard::{StepOutcome, WizardOptions, WizardStep, ACCOUNT_KIND_NOTICE};

#[test]
fn test_new_wizard_starts_on_identity_step() {
    let state = WizardState::default();
    assert_eq!(state.step(), WizardStep::Identity);
    assert!(state.errors().is_empty());
    assert!(!state.is_submitting());
}

#[test]
fn test_field_change_formats_and_validates_reactively() {
    let mut state = WizardState::default();
    change(&mut state, DraftField::Phone, "1198765");

    assert_eq!(state.draft().phone, "(11) 98765");
    assert_eq!(state.field_error(DraftField::Phone), None);

    change(&mut state, DraftField::Name, "jo");
    assert_eq!(state.draft().name, "Jo");
    assert_eq!(
        state.field_error(DraftField::Name),
        Some("O nome deve ter mais de 3 caracteres")
    );

    change(&mut state, DraftField::Name, "joão");
    assert_eq!(state.field_error(DraftField::Name), None);
}

#[test]
fn test_advance_blocked_on_invalid_identity() {
    let mut state = WizardState::default();
    change(&mut state, DraftField::Email, "nao-e-email");

    let outcome = state.apply(WizardEvent::Advance);

    assert_eq!(outcome, StepOutcome::Blocked { notice: BLOCKING_NOTICE });
    assert_eq!(state.step(), WizardStep::Identity);
    assert_eq!(state.field_error(DraftField::Email), Some("Formato de e-mail inválido"));
    assert_eq!(state.field_error(DraftField::Name), Some("O nome é obrigatório"));
}

#[test]
fn test_advance_requires_account_kind() {
    let mut state = WizardState::default();
    change(&mut state, DraftField::Email, "ana@uez.com");
    change(&mut state, DraftField::Name, "Ana Souza");

    let outcome = state.apply(WizardEvent::Advance);

    assert_eq!(outcome, StepOutcome::Blocked { notice: ACCOUNT_KIND_NOTICE });
    assert_eq!(state.step(), WizardStep::Identity);
}

#[test]
fn test_valid_steps_advance_in_order() {
    let mut state = WizardState::default();
    fill_identity(&mut state, AccountKind::Provider);

    assert_eq!(
        state.apply(WizardEvent::Advance),
        StepOutcome::Advanced { from: WizardStep::Identity, to: WizardStep::Personal }
    );

    fill_personal(&mut state);
    assert_eq!(
        state.apply(WizardEvent::Advance),
        StepOutcome::Advanced { from: WizardStep::Personal, to: WizardStep::Address }
    );

    fill_address(&mut state);
    assert_eq!(
        state.apply(WizardEvent::Advance),
        StepOutcome::Advanced { from: WizardStep::Address, to: WizardStep::ServiceCategory }
    );
}

#[test]
fn test_password_mismatch_blocks_personal_step() {
    let mut state = WizardState::default();
    fill_identity(&mut state, AccountKind::Client);
    state.apply(WizardEvent::Advance);
    fill_personal(&mut state);
    change(&mut state, DraftField::PasswordConfirmation, "segredo124");

    assert_eq!(state.password_mismatch(), Some(PASSWORD_MISMATCH_MESSAGE));

    let outcome = state.apply(WizardEvent::Advance);
    assert_eq!(outcome, StepOutcome::Blocked { notice: PASSWORD_MISMATCH_MESSAGE });
    assert_eq!(state.step(), WizardStep::Personal);

    change(&mut state, DraftField::PasswordConfirmation, "segredo123");
    assert_eq!(state.password_mismatch(), None);
    assert_eq!(
        state.apply(WizardEvent::Advance),
        StepOutcome::Advanced { from: WizardStep::Personal, to: WizardStep::Address }
    );
}

#[test]
fn test_back_is_unconditional_and_clamped() {
    let mut state = at_terminal_step(AccountKind::Client);
    change(&mut state, DraftField::Street, "");

    assert_eq!(
        state.apply(WizardEvent::Back),
        StepOutcome::Retreated { from: WizardStep::Address, to: WizardStep::Personal }
    );
    state.apply(WizardEvent::Back);
    let outcome = state.apply(WizardEvent::Back);

    assert_eq!(
        outcome,
        StepOutcome::Retreated { from: WizardStep::Identity, to: WizardStep::Identity }
    );
    assert_eq!(state.step(), WizardStep::Identity);
}

#[test]
fn test_first_advance_suppressed_only_when_enabled() {
    let options = WizardOptions { suppress_first_advance: true };
    let mut state = WizardState::new(options);
    fill_identity(&mut state, AccountKind::Client);

    assert_eq!(state.apply(WizardEvent::Advance), StepOutcome::Suppressed);
    assert_eq!(state.step(), WizardStep::Identity);
    assert!(matches!(state.apply(WizardEvent::Advance), StepOutcome::Advanced { .. }));

    let mut state = WizardState::default();
    fill_identity(&mut state, AccountKind::Client);
    assert!(matches!(state.apply(WizardEvent::Advance), StepOutcome::Advanced { .. }));
}

#[test]
fn test_address_resolved_overwrites_and_revalidates() {
    let mut state = WizardState::default();
    change(&mut state, DraftField::Street, "");
    assert!(state.field_error(DraftField::Street).is_some());

    let outcome = state.apply(WizardEvent::AddressResolved(ResolvedAddress {
        postal_code: "01310100".to_string(),
        street: "Av. Paulista".to_string(),
        neighborhood: "Bela Vista".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
    }));

    assert_eq!(outcome, StepOutcome::AddressApplied);
    let draft = state.draft();
    assert_eq!(draft.postal_code, "01310-100");
    assert_eq!(draft.address.street, "Av. Paulista");
    assert_eq!(draft.address.neighborhood, "Bela Vista");
    assert_eq!(draft.address.city, "São Paulo");
    assert_eq!(draft.address.state, "SP");
    assert_eq!(state.field_error(DraftField::Street), None);
    assert_eq!(state.field_error(DraftField::PostalCode), None);
}

#[test]
fn test_switching_to_client_clamps_service_step() {
    let mut state = at_terminal_step(AccountKind::Provider);
    assert_eq!(state.step(), WizardStep::ServiceCategory);

    state.apply(WizardEvent::AccountKindSelected(AccountKind::Client));

    assert_eq!(state.step(), WizardStep::Address);
    assert!(state.is_terminal_step());
}

#[test]
fn test_submission_flag_blocks_second_start() {
    let mut state = at_terminal_step(AccountKind::Client);

    assert_eq!(state.apply(WizardEvent::SubmissionStarted), StepOutcome::Submitting);
    assert_eq!(
        state.apply(WizardEvent::SubmissionStarted),
        StepOutcome::Blocked { notice: LOADING_NOTICE }
    );
    assert_eq!(state.submission_check(), Err(SubmissionError::AlreadySubmitting));
    assert_eq!(
        state.apply(WizardEvent::Advance),
        StepOutcome::Blocked { notice: LOADING_NOTICE }
    );

    assert_eq!(state.apply(WizardEvent::SubmissionSettled), StepOutcome::Settled);
    assert!(!state.is_submitting());
}

#[test]
fn test_submission_check_requires_terminal_step() {
    let mut state = WizardState::default();
    fill_identity(&mut state, AccountKind::Client);

    assert_eq!(
        state.submission_check(),
        Err(SubmissionError::NotTerminalStep { step: WizardStep::Identity })
    );
    assert_eq!(
        at_terminal_step(AccountKind::Client).submission_check(),
        Ok(AccountKind::Client)
    );
}

#[test]
fn test_validate_all_reports_every_field() {
    let mut state = WizardState::default();
    state.apply(WizardEvent::AccountKindSelected(AccountKind::Client));

    let outcome = state.apply(WizardEvent::ValidateAll);

    assert_eq!(outcome, StepOutcome::Validated { valid: false });
    assert!(state.field_error(DraftField::Email).is_some());
    assert!(state.field_error(DraftField::State).is_some());
    assert_eq!(state.field_error(DraftField::ServiceId), None);
}

#[test]
fn test_reset_keeps_options_only() {
    let options = WizardOptions { suppress_first_advance: true };
    let mut state = WizardState::new(options);
    fill_identity(&mut state, AccountKind::Client);

    assert_eq!(state.apply(WizardEvent::Reset), StepOutcome::Cleared);
    assert_eq!(state, WizardState::new(options));
}

#[test]
fn test_state_round_trips_through_json() {
    let state = at_terminal_step(AccountKind::Provider);
    let json = serde_json::to_string(&state).unwrap();
    let restored: WizardState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
}
