//! Body of `POST /register`

use serde::{Deserialize, Serialize};

use crate::domain::entities::{AccountKind, Address, RegistrationDraft};

/// Registration payload built from a validated draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub cpf: String,
    #[serde(rename = "dataNasc")]
    pub data_nasc: String,
    pub cep: String,
    pub telefone: String,
    pub endereco: Address,
    pub usertype: AccountKind,
    #[serde(rename = "idServico", skip_serializing_if = "Option::is_none")]
    pub id_servico: Option<String>,
    pub username: String,
}

impl RegistrationRequest {
    /// Build the payload; the service id is only sent for providers
    pub fn from_draft(draft: &RegistrationDraft, kind: AccountKind) -> Self {
        let id_servico = match kind {
            AccountKind::Provider => Some(draft.service_id.clone()),
            AccountKind::Client => None,
        };

        Self {
            nome: draft.name.clone(),
            email: draft.email.clone(),
            senha: draft.password.clone(),
            cpf: draft.tax_id.clone(),
            data_nasc: draft.birth_date.clone(),
            cep: draft.postal_code.clone(),
            telefone: draft.phone.clone(),
            endereco: draft.address.clone(),
            usertype: kind,
            id_servico,
            username: draft.username().to_string(),
        }
    }
}
