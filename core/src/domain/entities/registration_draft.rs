//! Registration draft: the in-progress, not yet submitted sign-up record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uez_shared::utils::{format_cep, format_cpf, format_phone, text::capitalize_words};

/// Represents the kind of account being registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    /// A customer looking for services
    #[serde(rename = "CLIENTE")]
    Client,
    /// A professional offering services
    #[serde(rename = "UZER")]
    Provider,
}

impl AccountKind {
    /// Value sent as `usertype` to the registration endpoint
    pub fn as_wire(&self) -> &'static str {
        match self {
            AccountKind::Client => "CLIENTE",
            AccountKind::Provider => "UZER",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for AccountKind {
    type Err = String;

    /// Accepts the wire names in any case (`?userType=cliente`) and the English names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CLIENTE" | "CLIENT" => Ok(AccountKind::Client),
            "UZER" | "PROVIDER" => Ok(AccountKind::Provider),
            _ => Err(format!("Invalid account kind: {}", s)),
        }
    }
}

/// Address block of the draft, sent nested as `endereco`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "logradouro")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "complemento", default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "estado")]
    pub state: String,
}

/// Every user-editable field of the draft
///
/// Keys follow the form paths used by the web client so field errors can be
/// matched back to inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DraftField {
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "nome")]
    Name,
    #[serde(rename = "userType")]
    AccountKind,
    #[serde(rename = "senha")]
    Password,
    #[serde(rename = "confirmarSenha")]
    PasswordConfirmation,
    #[serde(rename = "telefone")]
    Phone,
    #[serde(rename = "dataNascimento")]
    BirthDate,
    #[serde(rename = "cpf")]
    TaxId,
    #[serde(rename = "cep")]
    PostalCode,
    #[serde(rename = "endereco.logradouro")]
    Street,
    #[serde(rename = "endereco.numero")]
    Number,
    #[serde(rename = "endereco.complemento")]
    Complement,
    #[serde(rename = "endereco.bairro")]
    Neighborhood,
    #[serde(rename = "endereco.cidade")]
    City,
    #[serde(rename = "endereco.estado")]
    State,
    #[serde(rename = "idServico")]
    ServiceId,
}

impl DraftField {
    pub const ALL: [DraftField; 16] = [
        DraftField::Email,
        DraftField::Name,
        DraftField::AccountKind,
        DraftField::Password,
        DraftField::PasswordConfirmation,
        DraftField::Phone,
        DraftField::BirthDate,
        DraftField::TaxId,
        DraftField::PostalCode,
        DraftField::Street,
        DraftField::Number,
        DraftField::Complement,
        DraftField::Neighborhood,
        DraftField::City,
        DraftField::State,
        DraftField::ServiceId,
    ];

    /// Form path of the field
    pub fn key(&self) -> &'static str {
        match self {
            DraftField::Email => "email",
            DraftField::Name => "nome",
            DraftField::AccountKind => "userType",
            DraftField::Password => "senha",
            DraftField::PasswordConfirmation => "confirmarSenha",
            DraftField::Phone => "telefone",
            DraftField::BirthDate => "dataNascimento",
            DraftField::TaxId => "cpf",
            DraftField::PostalCode => "cep",
            DraftField::Street => "endereco.logradouro",
            DraftField::Number => "endereco.numero",
            DraftField::Complement => "endereco.complemento",
            DraftField::Neighborhood => "endereco.bairro",
            DraftField::City => "endereco.cidade",
            DraftField::State => "endereco.estado",
            DraftField::ServiceId => "idServico",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// The single mutable entity of the registration flow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub email: String,
    pub name: String,
    pub account_kind: Option<AccountKind>,
    pub password: String,
    pub password_confirmation: String,
    /// `(NN) NNNNN-NNNN`
    pub phone: String,
    /// ISO `YYYY-MM-DD`
    pub birth_date: String,
    /// CPF, `NNN.NNN.NNN-NN`
    pub tax_id: String,
    /// CEP, `NNNNN-NNN`
    pub postal_code: String,
    pub address: Address,
    /// Service category, required for providers only
    pub service_id: String,
}

impl RegistrationDraft {
    /// Creates an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty draft with a preselected account kind
    pub fn for_kind(kind: AccountKind) -> Self {
        Self {
            account_kind: Some(kind),
            ..Self::default()
        }
    }

    /// Stores user input into a field, normalizing it the way the form does
    /// on every keystroke
    pub fn set(&mut self, field: DraftField, raw: &str) {
        match field {
            DraftField::Email => self.email = raw.trim().to_string(),
            DraftField::Name => self.name = capitalize_words(raw),
            DraftField::AccountKind => self.account_kind = raw.parse().ok(),
            DraftField::Password => self.password = raw.to_string(),
            DraftField::PasswordConfirmation => self.password_confirmation = raw.to_string(),
            DraftField::Phone => self.phone = format_phone(raw),
            DraftField::BirthDate => self.birth_date = raw.trim().to_string(),
            DraftField::TaxId => self.tax_id = format_cpf(raw),
            DraftField::PostalCode => self.postal_code = format_cep(raw),
            DraftField::Street => self.address.street = raw.to_string(),
            DraftField::Number => self.address.number = raw.trim().to_string(),
            DraftField::Complement => {
                self.address.complement = (!raw.is_empty()).then(|| raw.to_string())
            }
            DraftField::Neighborhood => self.address.neighborhood = raw.to_string(),
            DraftField::City => self.address.city = raw.to_string(),
            DraftField::State => self.address.state = raw.to_string(),
            DraftField::ServiceId => self.service_id = raw.trim().to_string(),
        }
    }

    /// Current value of a field as shown in its input
    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Email => &self.email,
            DraftField::Name => &self.name,
            DraftField::AccountKind => self.account_kind.map(|k| k.as_wire()).unwrap_or(""),
            DraftField::Password => &self.password,
            DraftField::PasswordConfirmation => &self.password_confirmation,
            DraftField::Phone => &self.phone,
            DraftField::BirthDate => &self.birth_date,
            DraftField::TaxId => &self.tax_id,
            DraftField::PostalCode => &self.postal_code,
            DraftField::Street => &self.address.street,
            DraftField::Number => &self.address.number,
            DraftField::Complement => self.address.complement.as_deref().unwrap_or(""),
            DraftField::Neighborhood => &self.address.neighborhood,
            DraftField::City => &self.address.city,
            DraftField::State => &self.address.state,
            DraftField::ServiceId => &self.service_id,
        }
    }

    /// Username derived from the local part of the email
    pub fn username(&self) -> &str {
        self.email.split('@').next().unwrap_or_default()
    }

    pub fn is_provider(&self) -> bool {
        matches!(self.account_kind, Some(AccountKind::Provider))
    }

    pub fn is_client(&self) -> bool {
        matches!(self.account_kind, Some(AccountKind::Client))
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.password_confirmation
    }
}
