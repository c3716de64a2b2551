//! Service category offered by providers (`GET /servicos`).

use serde::{Deserialize, Serialize};

/// Entry of the provider-category selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria", default)]
    pub category: String,
    pub id: String,
}
