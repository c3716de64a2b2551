//! Delayed navigation issued after a completed action

use serde::Serialize;
use std::time::Duration;
use url::form_urlencoded;

/// Navigation target to follow once `delay` has elapsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub location: String,
    pub delay: Duration,
}

impl Redirect {
    pub fn new(location: impl Into<String>, delay: Duration) -> Self {
        Self {
            location: location.into(),
            delay,
        }
    }

    /// Login page preloaded with the email that just registered
    pub fn to_login(login_path: &str, email: &str, delay: Duration) -> Self {
        Self::new(with_query(login_path, "userEmail", email), delay)
    }

    /// Sleeps for the delay and hands back the location to navigate to
    pub async fn wait(self) -> String {
        tokio::time::sleep(self.delay).await;
        self.location
    }
}

/// `path?key=value` with the value form-encoded
pub(crate) fn with_query(path: &str, key: &str, value: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();
    format!("{}?{}", path, query)
}
