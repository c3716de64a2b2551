mod transition_tests;

use crate::domain::{AccountKind, DraftField};
use crate::wizard::{WizardEvent, WizardState};

pub(super) fn change(state: &mut WizardState, field: DraftField, value: &str) {
    state.apply(WizardEvent::FieldChanged {
        field,
        value: value.to_string(),
    });
}

pub(super) fn fill_identity(state: &mut WizardState, kind: AccountKind) {
    change(state, DraftField::Email, "maria.silva@uez.com.br");
    change(state, DraftField::Name, "maria da silva");
    state.apply(WizardEvent::AccountKindSelected(kind));
}

pub(super) fn fill_personal(state: &mut WizardState) {
    change(state, DraftField::Phone, "11987654321");
    change(state, DraftField::BirthDate, "1990-05-17");
    change(state, DraftField::Password, "segredo123");
    change(state, DraftField::PasswordConfirmation, "segredo123");
    change(state, DraftField::TaxId, "12345678901");
}

pub(super) fn fill_address(state: &mut WizardState) {
    change(state, DraftField::PostalCode, "01310100");
    change(state, DraftField::Street, "Avenida Paulista");
    change(state, DraftField::Number, "1000");
    change(state, DraftField::Neighborhood, "Bela Vista");
    change(state, DraftField::City, "São Paulo");
    change(state, DraftField::State, "SP");
}

/// Wizard filled and advanced up to the terminal step of `kind`
pub(super) fn at_terminal_step(kind: AccountKind) -> WizardState {
    let mut state = WizardState::default();
    fill_identity(&mut state, kind);
    state.apply(WizardEvent::Advance);
    fill_personal(&mut state);
    state.apply(WizardEvent::Advance);
    fill_address(&mut state);
    if kind == AccountKind::Provider {
        state.apply(WizardEvent::Advance);
        change(&mut state, DraftField::ServiceId, "svc-eletricista");
    }
    state
}
