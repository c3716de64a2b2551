//! ViaCEP HTTP client

use async_trait::async_trait;
use reqwest::Client;
use uez_core::domain::ResolvedAddress;
use uez_core::services::AddressLookupTrait;
use uez_shared::config::LookupConfig;

use super::response::ViaCepResponse;
use crate::http::decode_body;
use crate::{build_http_client, InfrastructureError};

/// Postal-code directory backed by ViaCEP
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: Client,
    config: LookupConfig,
}

impl ViaCepClient {
    pub fn new(config: LookupConfig) -> Result<Self, InfrastructureError> {
        if !config.url_template.contains("{cep}") {
            return Err(InfrastructureError::Config(format!(
                "Lookup URL template has no {{cep}} placeholder: {}",
                config.url_template
            )));
        }
        let client = build_http_client(config.timeout_secs)?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(LookupConfig::from_env())
    }

    /// Resolve eight CEP digits; `Ok(None)` when ViaCEP does not know the code
    pub async fn find(&self, cep_digits: &str) -> Result<Option<ResolvedAddress>, InfrastructureError> {
        let url = self.config.url_for(cep_digits);
        tracing::debug!(url = %url, "Querying ViaCEP");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed: ViaCepResponse = decode_body(status, &body)?;
        Ok(parsed.into_address())
    }
}

#[async_trait]
impl AddressLookupTrait for ViaCepClient {
    async fn lookup(&self, cep_digits: &str) -> Result<Option<ResolvedAddress>, String> {
        self.find(cep_digits).await.map_err(|e| e.to_string())
    }
}
