use serde::Serialize;

use crate::domain::value_objects::redirect::with_query;

/// Chat view to open after contacting a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatNavigation {
    pub chat_id: String,
    /// `/chat?userChatId=<id>`, id form-encoded
    pub location: String,
}

impl ChatNavigation {
    pub fn new(chat_id: impl Into<String>) -> Self {
        let chat_id = chat_id.into();
        let location = with_query("/chat", "userChatId", &chat_id);
        Self { chat_id, location }
    }
}
