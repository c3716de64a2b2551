//! Contact service implementation

use std::sync::Arc;

use crate::domain::{Notification, ProviderCard, SessionToken};
use crate::errors::{DomainError, DomainResult};

use super::traits::{ChatApiTrait, NotificationTrait};
use super::types::ChatNavigation;

/// Service behind the "Contatar" button of a provider card
pub struct ContactService<C: ChatApiTrait, N: NotificationTrait> {
    /// Chat endpoint client
    chat_api: Arc<C>,
    /// Notification dispatcher
    notifier: Arc<N>,
}

impl<C: ChatApiTrait, N: NotificationTrait> ContactService<C, N> {
    pub fn new(chat_api: Arc<C>, notifier: Arc<N>) -> Self {
        Self { chat_api, notifier }
    }

    /// Open a chat with a provider and notify them
    ///
    /// # Arguments
    ///
    /// * `session` - Access token of the signed-in user, if any
    /// * `contact_id` - Id of the provider being contacted
    ///
    /// # Returns
    ///
    /// * `Ok(ChatNavigation)` - Chat to navigate to, even if the notification failed
    /// * `Err(DomainError::Unauthorized)` - No session
    /// * `Err(DomainError::Remote)` - The chat could not be created
    pub async fn request_service(
        &self,
        session: Option<&SessionToken>,
        contact_id: &str,
    ) -> DomainResult<ChatNavigation> {
        let session = session.ok_or(DomainError::Unauthorized)?;

        let contact_id = contact_id.trim();
        if contact_id.is_empty() {
            return Err(DomainError::Validation {
                message: "Contact id is required".to_string(),
            });
        }

        let chat = self
            .chat_api
            .create_chat(session, contact_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    contact_id = contact_id,
                    error = %e,
                    event = "chat_create_failed",
                    "Failed to create chat"
                );
                DomainError::Remote { message: e }
            })?;

        let notification = Notification::service_request(contact_id);
        if let Err(e) = self.notifier.send_notification(&notification).await {
            tracing::warn!(
                contact_id = contact_id,
                error = %e,
                event = "notification_failed",
                "Chat created but provider notification failed"
            );
        }

        tracing::info!(
            contact_id = contact_id,
            chat_id = %chat.id,
            event = "chat_opened",
            "Chat opened with provider"
        );

        Ok(ChatNavigation::new(chat.id))
    }

    /// Contact the provider shown on a directory card
    pub async fn contact_provider(
        &self,
        session: Option<&SessionToken>,
        card: &ProviderCard,
    ) -> DomainResult<ChatNavigation> {
        if !card.is_loaded() {
            return Err(DomainError::BusinessRule {
                message: "Provider card is still loading".to_string(),
            });
        }
        self.request_service(session, &card.id).await
    }
}
