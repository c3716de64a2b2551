//! Core service trait implementations for [`UezApiClient`]

use async_trait::async_trait;
use uez_core::domain::{Notification, RegistrationRequest, ServiceCategory, SessionToken};
use uez_core::services::{ChatApiTrait, NotificationTrait, RegistrationApiTrait, ServiceCatalogTrait};
use uez_shared::types::{Chat, MessageResponse};

use super::client::UezApiClient;

#[async_trait]
impl RegistrationApiTrait for UezApiClient {
    async fn register(&self, request: &RegistrationRequest) -> Result<MessageResponse, String> {
        UezApiClient::register(self, request).await.map_err(|e| e.to_string())
    }
}

#[async_trait]
impl ServiceCatalogTrait for UezApiClient {
    async fn list_services(&self) -> Result<Vec<ServiceCategory>, String> {
        UezApiClient::list_services(self).await.map_err(|e| e.to_string())
    }
}

#[async_trait]
impl ChatApiTrait for UezApiClient {
    async fn create_chat(&self, session: &SessionToken, contact_id: &str) -> Result<Chat, String> {
        UezApiClient::create_chat(self, session, contact_id)
            .await
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl NotificationTrait for UezApiClient {
    async fn send_notification(&self, notification: &Notification) -> Result<(), String> {
        UezApiClient::send_notification(self, notification)
            .await
            .map_err(|e| e.to_string())
    }
}
