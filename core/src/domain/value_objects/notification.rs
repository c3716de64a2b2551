//! Push notification addressed to another user

use serde::{Deserialize, Serialize};

/// Kind sent when a client opens a chat with a provider
pub const SERVICE_REQUEST_KIND: &str = "solicitCliente";
pub const SERVICE_REQUEST_MESSAGE: &str = "Cliente mandou mensagem para você!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: String,
    pub message: String,
    pub recipient_id: String,
}

impl Notification {
    /// "A client messaged you" notification for a provider
    pub fn service_request(recipient_id: impl Into<String>) -> Self {
        Self {
            kind: SERVICE_REQUEST_KIND.to_string(),
            message: SERVICE_REQUEST_MESSAGE.to_string(),
            recipient_id: recipient_id.into(),
        }
    }
}
