use anyhow::Result;
use std::sync::Arc;
use uez_core::services::RegistrationService;
use uez_infra::UezApiClient;
use uez_shared::config::AppConfig;

pub async fn list_services(config: &AppConfig, json: bool) -> Result<()> {
    let client = Arc::new(UezApiClient::new(config.api.clone())?);
    let service = RegistrationService::new(client.clone(), client, (&config.registration).into());

    let options = service.load_service_options().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    if options.is_empty() {
        println!("Nenhum serviço disponível");
    }
    for option in &options {
        println!("{:<24} {}", option.id, option.name);
    }
    Ok(())
}
