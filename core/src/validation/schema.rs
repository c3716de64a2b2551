use uez_shared::utils::validation::{Validate, ValidationErrors};

use crate::domain::{DraftField, RegistrationDraft};
use crate::wizard::WizardStep;

use super::field_errors::FieldErrors;
use super::rules::rule_for;
use super::PASSWORD_MISMATCH_MESSAGE;

/// Message of the first failing rule for `field`, or `None` when it passes.
///
/// Provider-only rules pass for any other account kind.
pub fn validate_field(draft: &RegistrationDraft, field: DraftField) -> Option<&'static str> {
    let rule = rule_for(field);
    if rule.provider_only && !draft.is_provider() {
        return None;
    }
    rule.first_failure(draft.value(field))
}

pub fn validate_fields(draft: &RegistrationDraft, fields: &[DraftField]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for &field in fields {
        errors.record(field, validate_field(draft, field).map(str::to_string));
    }
    errors
}

/// Errors for the fields shown on `step`
pub fn validate_step(draft: &RegistrationDraft, step: WizardStep) -> FieldErrors {
    validate_fields(draft, step.fields())
}

/// Errors for every field of the draft
pub fn validate_all(draft: &RegistrationDraft) -> FieldErrors {
    validate_fields(draft, &DraftField::ALL)
}

/// Cross-field rule: the confirmation must equal the password
pub fn passwords_match(draft: &RegistrationDraft) -> Result<(), &'static str> {
    if draft.passwords_match() {
        Ok(())
    } else {
        Err(PASSWORD_MISMATCH_MESSAGE)
    }
}

/// Whole-draft check in the shared error shape, mismatch reported on the confirmation
impl Validate for RegistrationDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors: ValidationErrors = (&validate_all(self)).into();
        if let Err(message) = passwords_match(self) {
            errors.add_error(DraftField::PasswordConfirmation.key(), message, "mismatch");
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
