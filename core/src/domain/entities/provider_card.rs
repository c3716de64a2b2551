//! Provider profile card shown in the service-provider directory.

use serde::{Deserialize, Serialize};

pub const LOADING_PLACEHOLDER: &str = "Carregando...";
pub const PHOTO_PLACEHOLDER: &str = "https://via.placeholder.com/150";

/// Directory entry for a service provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderCard {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "servicoPrincipal")]
    pub main_service: String,
    #[serde(rename = "photoUrl")]
    pub photo_url: String,
    #[serde(rename = "tipoServico")]
    pub service_type: String,
    /// Provider id; also the contact id used to open a chat
    #[serde(rename = "_id")]
    pub id: String,
}

impl Default for ProviderCard {
    /// A card still waiting for its data
    fn default() -> Self {
        Self {
            name: LOADING_PLACEHOLDER.to_string(),
            main_service: LOADING_PLACEHOLDER.to_string(),
            photo_url: PHOTO_PLACEHOLDER.to_string(),
            service_type: LOADING_PLACEHOLDER.to_string(),
            id: String::new(),
        }
    }
}

impl ProviderCard {
    /// Upper-cased service type, as rendered on the card badge
    pub fn service_type_badge(&self) -> String {
        self.service_type.to_uppercase()
    }

    pub fn is_loaded(&self) -> bool {
        !self.id.is_empty()
    }

    /// Public profile page of the provider
    pub fn profile_path(&self) -> String {
        format!("/uzers/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_placeholders() {
        let card: ProviderCard = serde_json::from_str(r#"{"nome":"João","_id":"42"}"#).unwrap();
        assert_eq!(card.name, "João");
        assert_eq!(card.main_service, LOADING_PLACEHOLDER);
        assert_eq!(card.photo_url, PHOTO_PLACEHOLDER);
        assert!(card.is_loaded());
        assert_eq!(card.profile_path(), "/uzers/42");
        assert!(!ProviderCard::default().is_loaded());
    }

    #[test]
    fn test_service_type_badge() {
        let card = ProviderCard {
            service_type: "elétrica".to_string(),
            ..Default::default()
        };
        assert_eq!(card.service_type_badge(), "ELÉTRICA");
    }
}
