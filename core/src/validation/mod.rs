//! Declarative validation of the registration draft
//!
//! - `rules` - per-field checks with their user-visible messages
//! - `schema` - evaluation of the rules per field, per step and for the whole draft
//! - `field_errors` - field-scoped message slots kept by the wizard

mod field_errors;
mod rules;
mod schema;

pub use field_errors::FieldErrors;
pub use rules::{rule_for, Check, FieldRule, BIRTH_DATE_MAX, BIRTH_DATE_MIN};
pub use schema::{passwords_match, validate_all, validate_field, validate_fields, validate_step};

/// Message for the cross-field password rule
pub const PASSWORD_MISMATCH_MESSAGE: &str = "As senhas devem coincidir";
