use anyhow::Result;
use std::sync::Arc;
use uez_core::services::ContactService;
use uez_infra::{access_token_from_cookies, UezApiClient};
use uez_shared::config::AppConfig;

use super::user_error;

pub async fn contact(config: &AppConfig, provider_id: &str, cookie: &str) -> Result<()> {
    let session = access_token_from_cookies(cookie, &config.session.cookie_name);
    if session.is_none() {
        tracing::debug!(cookie_name = %config.session.cookie_name, "No session cookie found");
    }

    let client = Arc::new(UezApiClient::new(config.api.clone())?);
    let service = ContactService::new(client.clone(), client);

    let navigation = service
        .request_service(session.as_ref(), provider_id)
        .await
        .map_err(user_error)?;

    println!("{}", navigation.location);
    Ok(())
}
