use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use uez_shared::utils::document::{CEP_REGEX, CPF_REGEX};
use uez_shared::utils::validation::validators;

use crate::domain::DraftField;

/// Earliest accepted birth date (inclusive)
pub const BIRTH_DATE_MIN: &str = "1950-01-01";
/// Latest accepted birth date (inclusive)
pub const BIRTH_DATE_MAX: &str = "2005-12-31";

const DATE_FORMAT: &str = "%Y-%m-%d";

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-záàâãéèêíïóôõöúüçñÁÀÂÃÉÈÊÍÏÓÔÕÖÚÜÇÑ ]+$").unwrap()
});

/// A single check on a field value, carrying the message shown when it fails
#[derive(Debug, Clone, Copy)]
pub enum Check {
    Required(&'static str),
    MinLength(usize, &'static str),
    MaxLength(usize, &'static str),
    Pattern(&'static Lazy<Regex>, &'static str),
    Email(&'static str),
    /// ISO date within `[min, max]`
    DateBetween {
        min: &'static str,
        max: &'static str,
        message: &'static str,
    },
}

impl Check {
    /// Message of the check if `value` fails it
    pub fn failure(&self, value: &str) -> Option<&'static str> {
        let passed = match self {
            Check::Required(_) => validators::not_empty(value),
            Check::MinLength(min, _) => value.chars().count() >= *min,
            Check::MaxLength(max, _) => value.chars().count() <= *max,
            Check::Pattern(pattern, _) => validators::matches_pattern(value, pattern),
            Check::Email(_) => validators::is_valid_email(value),
            Check::DateBetween { min, max, .. } => {
                let parse = |s: &str| NaiveDate::parse_from_str(s, DATE_FORMAT).ok();
                match (parse(value), parse(min), parse(max)) {
                    (Some(date), Some(min), Some(max)) => date >= min && date <= max,
                    _ => false,
                }
            }
        };

        if passed {
            None
        } else {
            Some(self.message())
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Check::Required(message)
            | Check::MinLength(_, message)
            | Check::MaxLength(_, message)
            | Check::Pattern(_, message)
            | Check::Email(message)
            | Check::DateBetween { message, .. } => message,
        }
    }
}

/// Ordered checks for one field
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: DraftField,
    pub checks: Vec<Check>,
    /// Only enforced when the draft is for a provider account
    pub provider_only: bool,
}

impl FieldRule {
    fn new(field: DraftField, checks: Vec<Check>) -> Self {
        Self {
            field,
            checks,
            provider_only: false,
        }
    }

    fn provider_only(mut self) -> Self {
        self.provider_only = true;
        self
    }

    /// First failing check's message, in declaration order
    pub fn first_failure(&self, value: &str) -> Option<&'static str> {
        self.checks.iter().find_map(|check| check.failure(value))
    }
}

static RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    use Check::*;
    use DraftField as F;

    vec![
        FieldRule::new(F::Email, vec![
            Required("O e-mail é obrigatório"),
            Email("Formato de e-mail inválido"),
        ]),
        FieldRule::new(F::Name, vec![
            Required("O nome é obrigatório"),
            MinLength(3, "O nome deve ter mais de 3 caracteres"),
            Pattern(&NAME_REGEX, "O nome deve conter apenas letras"),
        ]),
        FieldRule::new(F::AccountKind, vec![Required("Selecione um tipo de usuário")]),
        FieldRule::new(F::Password, vec![
            Required("A senha é obrigatória"),
            MinLength(6, "A senha deve ter mais de 6 caracteres"),
            MaxLength(24, "A senha deve ter menos de 24 caracteres"),
        ]),
        FieldRule::new(F::PasswordConfirmation, vec![
            MaxLength(24, "A senha deve ter menos de 24 caracteres"),
        ]),
        FieldRule::new(F::Phone, vec![
            Required("O telefone é obrigatório"),
            MinLength(10, "O telefone deve ter 10 dígitos"),
            MaxLength(15, "O telefone deve ter no máximo 15 dígitos"),
        ]),
        FieldRule::new(F::BirthDate, vec![
            Required("A data de nascimento é obrigatória"),
            DateBetween {
                min: BIRTH_DATE_MIN,
                max: BIRTH_DATE_MAX,
                message: "A data de nascimento deve estar entre 01/01/1950 e 31/12/2005",
            },
        ]),
        FieldRule::new(F::TaxId, vec![
            Required("O CPF é obrigatório"),
            Pattern(&CPF_REGEX, "Formato de CPF inválido"),
        ]),
        FieldRule::new(F::PostalCode, vec![
            Required("O CEP é obrigatório"),
            Pattern(&CEP_REGEX, "Formato de CEP inválido"),
        ]),
        FieldRule::new(F::Street, vec![Required("O logradouro é obrigatório")]),
        FieldRule::new(F::Number, vec![Required("O número é obrigatório")]),
        FieldRule::new(F::Complement, vec![
            MaxLength(200, "O complemento deve ter no máximo 200 caracteres"),
        ]),
        FieldRule::new(F::Neighborhood, vec![Required("O bairro é obrigatório")]),
        FieldRule::new(F::City, vec![Required("A cidade é obrigatória")]),
        FieldRule::new(F::State, vec![Required("O estado é obrigatório")]),
        FieldRule::new(F::ServiceId, vec![Required("O serviço é obrigatório")]).provider_only(),
    ]
});

/// Rule declared for a field
pub fn rule_for(field: DraftField) -> &'static FieldRule {
    RULES
        .iter()
        .find(|rule| rule.field == field)
        .unwrap_or_else(|| unreachable!("every draft field has a rule"))
}
