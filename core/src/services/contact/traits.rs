//! Traits for chat and notification integration

use async_trait::async_trait;
use uez_shared::types::Chat;

use crate::domain::{Notification, SessionToken};

/// Trait for the chat endpoint
#[async_trait]
pub trait ChatApiTrait: Send + Sync {
    /// Create (or reopen) a chat with `contact_id` on behalf of the session's user
    async fn create_chat(&self, session: &SessionToken, contact_id: &str) -> Result<Chat, String>;
}

/// Trait for push notification dispatch
#[async_trait]
pub trait NotificationTrait: Send + Sync {
    async fn send_notification(&self, notification: &Notification) -> Result<(), String>;
}
