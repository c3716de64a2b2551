//! reqwest client for the marketplace API

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Url};
use uez_core::domain::{Notification, RegistrationRequest, ServiceCategory, SessionToken};
use uez_shared::config::ApiConfig;
use uez_shared::types::{Chat, MessageResponse};

use super::wire::{decode, decode_message, status_error, NotificationBody};
use crate::{build_http_client, InfrastructureError};

/// Client for the UEZ marketplace REST API
#[derive(Debug, Clone)]
pub struct UezApiClient {
    client: Client,
    config: ApiConfig,
}

impl UezApiClient {
    /// Create a client for the configured base URL
    pub fn new(config: ApiConfig) -> Result<Self, InfrastructureError> {
        if config.base_url.trim().is_empty() {
            return Err(InfrastructureError::Config("API base URL is empty".to_string()));
        }
        let client = build_http_client(config.timeout_secs)?;

        tracing::info!(base_url = %config.base_url, "Marketplace API client initialized");

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `POST /register`
    pub async fn register(&self, request: &RegistrationRequest) -> Result<MessageResponse, InfrastructureError> {
        let url = self.config.endpoint("/register");
        tracing::debug!(url = %url, username = %request.username, "Posting registration");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        decode_message(status, &body)
    }

    /// `GET /servicos`
    pub async fn list_services(&self) -> Result<Vec<ServiceCategory>, InfrastructureError> {
        let url = self.config.endpoint("/servicos");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        decode(status, &body)
    }

    /// `POST /chat/create/{contactId}` with the session's bearer token
    pub async fn create_chat(&self, session: &SessionToken, contact_id: &str) -> Result<Chat, InfrastructureError> {
        let url = self.chat_url(contact_id)?;
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, session.bearer())
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        decode(status, &body)
    }

    /// `/chat/create/` plus the contact id as one escaped path segment
    fn chat_url(&self, contact_id: &str) -> Result<Url, InfrastructureError> {
        if contact_id.is_empty() || matches!(contact_id, "." | "..") {
            return Err(InfrastructureError::InvalidRequest(format!(
                "Invalid contact id: {:?}",
                contact_id
            )));
        }

        let mut url = Url::parse(&self.config.endpoint("/chat/create"))
            .map_err(|e| InfrastructureError::Config(format!("Invalid API base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| InfrastructureError::Config("API base URL cannot carry a path".to_string()))?
            .push(contact_id);
        Ok(url)
    }

    /// Dispatch a push notification through the configured endpoint
    pub async fn send_notification(&self, notification: &Notification) -> Result<(), InfrastructureError> {
        let url = self.config.endpoint(&self.config.notification_path);
        let response = self
            .client
            .post(&url)
            .json(&NotificationBody::from(notification))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body))
    }
}
