use serde::Deserialize;
use uez_core::domain::ResolvedAddress;

/// Body returned by `https://viacep.com.br/ws/{cep}/json/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ViaCepResponse {
    /// `{"erro": true}` (older deployments send `"true"`)
    NotFound { erro: serde_json::Value },
    Found(ViaCepAddress),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ViaCepAddress {
    pub cep: String,
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub complemento: String,
    #[serde(default)]
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
}

impl ViaCepResponse {
    pub fn into_address(self) -> Option<ResolvedAddress> {
        match self {
            ViaCepResponse::NotFound { .. } => None,
            ViaCepResponse::Found(address) => Some(address.into()),
        }
    }
}

impl From<ViaCepAddress> for ResolvedAddress {
    fn from(address: ViaCepAddress) -> Self {
        ResolvedAddress {
            postal_code: address.cep,
            street: address.logradouro,
            neighborhood: address.bairro,
            city: address.localidade,
            state: address.uf,
        }
    }
}
