//! Address resolved from a postal code by the lookup service

use serde::{Deserialize, Serialize};

/// Structured address for a CEP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAddress {
    pub postal_code: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    /// Two-letter state code (UF)
    pub state: String,
}
