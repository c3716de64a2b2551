//! Response bodies returned by the marketplace API

use serde::{Deserialize, Serialize};

/// Body of `POST /register` and other endpoints that answer with a
/// human-readable status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Whether the message carries the given marker substring
    pub fn contains_marker(&self, marker: &str) -> bool {
        !marker.is_empty() && self.message.contains(marker)
    }
}

/// Chat created by `POST /chat/create/{contactId}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    #[serde(rename = "_id")]
    pub id: String,
}
