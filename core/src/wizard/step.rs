use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{AccountKind, DraftField};

/// Wizard steps, numbered as shown to the user ("Etapa N")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    /// Email, name and account kind
    Identity = 1,
    /// Phone, birth date, credentials and CPF
    Personal = 2,
    /// CEP and address
    Address = 3,
    /// Service category, providers only
    ServiceCategory = 4,
}

const IDENTITY_FIELDS: &[DraftField] = &[DraftField::Email, DraftField::Name, DraftField::AccountKind];

const PERSONAL_FIELDS: &[DraftField] = &[
    DraftField::Phone,
    DraftField::BirthDate,
    DraftField::Password,
    DraftField::PasswordConfirmation,
    DraftField::TaxId,
];

const ADDRESS_FIELDS: &[DraftField] = &[
    DraftField::PostalCode,
    DraftField::Street,
    DraftField::Number,
    DraftField::Complement,
    DraftField::Neighborhood,
    DraftField::City,
    DraftField::State,
];

const SERVICE_FIELDS: &[DraftField] = &[DraftField::ServiceId];

impl WizardStep {
    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(WizardStep::Identity),
            2 => Some(WizardStep::Personal),
            3 => Some(WizardStep::Address),
            4 => Some(WizardStep::ServiceCategory),
            _ => None,
        }
    }

    /// Fields re-validated when advancing from this step
    pub fn fields(&self) -> &'static [DraftField] {
        match self {
            WizardStep::Identity => IDENTITY_FIELDS,
            WizardStep::Personal => PERSONAL_FIELDS,
            WizardStep::Address => ADDRESS_FIELDS,
            WizardStep::ServiceCategory => SERVICE_FIELDS,
        }
    }

    /// Step shown for a field
    pub fn of_field(field: DraftField) -> Self {
        [
            WizardStep::Identity,
            WizardStep::Personal,
            WizardStep::Address,
            WizardStep::ServiceCategory,
        ]
        .into_iter()
        .find(|step| step.fields().contains(&field))
        .unwrap_or(WizardStep::Identity)
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Previous step, clamped at [`WizardStep::Identity`]
    pub fn previous(&self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(WizardStep::Identity)
    }

    /// Last step for an account kind
    pub fn terminal_for(kind: AccountKind) -> Self {
        match kind {
            AccountKind::Client => WizardStep::Address,
            AccountKind::Provider => WizardStep::ServiceCategory,
        }
    }

    /// Whether only submission remains from this step
    pub fn is_terminal(&self, kind: AccountKind) -> bool {
        *self == Self::terminal_for(kind)
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Identity
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Etapa {}", self.number())
    }
}
