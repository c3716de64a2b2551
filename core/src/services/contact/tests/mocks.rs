//! Mock chat and notification services

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uez_shared::types::Chat;

use crate::domain::{Notification, SessionToken};
use crate::services::contact::traits::{ChatApiTrait, NotificationTrait};

pub struct MockChatApi {
    pub calls: Arc<Mutex<Vec<(String, String)>>>, // (bearer, contact id)
    pub should_fail: bool,
}

impl MockChatApi {
    pub fn new(should_fail: bool) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            should_fail,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatApiTrait for MockChatApi {
    async fn create_chat(&self, session: &SessionToken, contact_id: &str) -> Result<Chat, String> {
        self.calls
            .lock()
            .unwrap()
            .push((session.bearer(), contact_id.to_string()));
        if self.should_fail {
            return Err("HTTP 500".to_string());
        }
        Ok(Chat {
            id: format!("chat-{}", contact_id),
        })
    }
}

pub struct MockNotifier {
    pub sent: Arc<Mutex<Vec<Notification>>>,
    pub should_fail: bool,
}

impl MockNotifier {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail,
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationTrait for MockNotifier {
    async fn send_notification(&self, notification: &Notification) -> Result<(), String> {
        self.sent.lock().unwrap().push(notification.clone());
        if self.should_fail {
            return Err("notification service down".to_string());
        }
        Ok(())
    }
}
